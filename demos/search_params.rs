/// `SearchParams` usage example
use fluent_url::SearchParams;

fn main() {
    // Parse a query string
    let mut params = SearchParams::parse("name=John&age=30&city=Tokyo");

    println!("name: {:?}", params.get("name")); // Some("John")
    println!("age: {:?}", params.get("age")); // Some("30")
    println!();

    // Mutators chain
    params
        .append("country", "Japan")
        .append("tag", "a")
        .append("tag", "b")
        .set("age", "31")
        .delete("city");
    println!("After edits: {params}"); // name=John&age=31&country=Japan&tag=a&tag=b
    println!("tag values: {:?}", params.get_all("tag")); // ["a", "b"]
    println!();

    // Merge replaces per name
    params.extend([("tag", "c"), ("lang", "ja")]);
    println!("After extend: {params}"); // name=John&age=31&country=Japan&tag=c&lang=ja

    params.sort();
    println!("After sort: {}", params.serialize()); // ?age=31&country=Japan&lang=ja&name=John&tag=c
    println!();

    // Plain mapping view
    for (key, value) in params.to_object() {
        println!("  {key} = {value}");
    }

    params.reset();
    println!("After reset: {:?}", params.serialize()); // ""
}
