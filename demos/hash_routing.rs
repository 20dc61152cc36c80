/// Hash routing (`#/path?query`) example
use fluent_url::{FieldValue, FluentUrl};

fn main() {
    let mut url = FluentUrl::parse("https://example.com/app#/dashboard?msg=Hello", None)
        .expect("Failed to parse URL");

    println!("Route: {}", url.hash_path()); // /dashboard
    println!("Route query: {:?}", url.hash_search()); // {"msg": "Hello"}

    url.set_hash_path("/projects")
        .set_hash_search([("query", "new construction"), ("sort", "-created")]);
    println!("Navigated: {url}"); // https://example.com/app#/projects?query=new+construction&sort=-created
    println!();

    // Export the route fields and apply them to another handle
    let state = url.export(["hashPath", "hashSearch"]);
    println!("Exported: {state:?}");

    let mut other = FluentUrl::parse("/app", None).expect("Failed to parse");
    other.import(state).expect("Failed to import");
    println!("Imported: {other}"); // /app#/projects?query=new+construction&sort=-created

    if let FieldValue::Map(search) = other.get_field(fluent_url::Field::HashSearch) {
        println!("sort = {:?}", search.get("sort")); // Some("-created")
    }
}
