//! Simple inspector for Collection+JSON documents.

use std::fs;

use collection_json::{Collection, Data, Link};

fn format_data(data: &Data) -> String {
    let value = match &data.value {
        Some(value) => {
            let text = value.to_string();
            let preview: String = text.chars().take(60).collect();
            if text.chars().count() > 60 {
                format!("{}...", preview)
            } else {
                preview
            }
        }
        None => "-".to_string(),
    };
    match &data.prompt {
        Some(prompt) => format!("{} = {} ({})", data.name, value, prompt),
        None => format!("{} = {}", data.name, value),
    }
}

fn format_link(link: &Link) -> String {
    let mut out = format!("[{}] {}", link.rel, link.href);
    if let Some(name) = &link.name {
        out.push_str(&format!(" name={}", name));
    }
    if let Some(render) = &link.render {
        out.push_str(&format!(" render={}", render));
    }
    out
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "collection.json".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", text.len());

    let collection = Collection::parse(&text).expect("Failed to parse");

    println!("\n=== Collection ===");
    println!("Version: {}", collection.version);
    println!("Href: {}", collection.href);

    println!("\n=== Links ({}) ===", collection.links.len());
    for link in &collection.links {
        println!("  {}", format_link(link));
    }

    println!("\n=== Items ({}) ===", collection.items.len());
    for (i, item) in collection.items.iter().enumerate() {
        println!("  #{} {}", i, item.href.as_deref().unwrap_or("(no href)"));
        for data in &item.data {
            println!("      {}", format_data(data));
        }
        for link in &item.links {
            println!("      {}", format_link(link));
        }
    }

    println!("\n=== Queries ({}) ===", collection.queries.len());
    for query in &collection.queries {
        println!("  [{}] {}", query.rel, query.href);
        for data in &query.data {
            println!("      {}", format_data(data));
        }
    }

    if let Some(template) = &collection.template {
        println!("\n=== Template ({} fields) ===", template.data.len());
        for data in &template.data {
            println!("  {}", format_data(data));
        }
    }

    if let Some(error) = &collection.error {
        println!("\n=== Error ===");
        println!("  Code: {}", error.code.as_deref().unwrap_or("-"));
        println!("  Title: {}", error.title.as_deref().unwrap_or("-"));
        println!("  Message: {}", error.message.as_deref().unwrap_or("-"));
    }
}
