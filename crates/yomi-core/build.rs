fn main() {
    // Validate the embedded vocabulary at compile time.
    validate_toml(
        "src/vocab/default_vocab.toml",
        include_str!("src/vocab/default_vocab.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
