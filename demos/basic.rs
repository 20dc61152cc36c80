use fluent_url::FluentUrl;

fn main() {
    // Parse a URL and read its parts
    let mut url = FluentUrl::parse("https://example.com:8080/path?query=value#hash", None)
        .expect("Failed to parse URL");

    println!("URL: {}", url.href()); // https://example.com:8080/path?query=value#hash
    println!("Protocol: {:?}", url.protocol()); // Some("https:")
    println!("Host: {:?}", url.host()); // Some("example.com:8080")
    println!("Pathname: {}", url.pathname()); // /path
    println!("Search: {}", url.search()); // ?query=value
    println!("Hash: {}", url.hash()); // #hash
    println!();

    // Chain setters
    url.set_protocol("http")
        .set_port("")
        .set_pathname("/docs")
        .qs_set("page", "2")
        .set_hash("");
    println!("Edited: {url}"); // http://example.com/docs?query=value&page=2
    println!();

    // Start from nothing and build up
    let mut built = FluentUrl::new();
    built
        .set_protocol("https")
        .set_hostname("example.com")
        .set_pathname("/foo")
        .set_search_object([("a", "one")]);
    println!("Built: {built}"); // https://example.com/foo?a=one

    // Relative references stay relative
    let mut relative = FluentUrl::parse("../assets/app.js?v=1", None).expect("Failed to parse");
    relative.qs_set("v", "2");
    println!("Relative: {relative} ({})", relative.is_relative()); // ../assets/app.js?v=2 (true)
}
