use rust_embed::RustEmbed;

/// Default static data documents, used when the data directory lacks a file
#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.json"]
#[exclude = "questions.json"]
pub struct DataAssets;

/// Embedded documentation assets (API overview page, OpenAPI document)
#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "static/"]
pub struct StaticAssets;

impl DataAssets {
    /// Get an embedded data document by file name
    pub fn get_document(file: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(file)
    }
}

impl StaticAssets {
    /// Get a static asset by path
    pub fn get_asset(path: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(path)
    }

    /// Get the content type for a given file extension
    pub fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css; charset=utf-8",
            Some("json") => "application/json; charset=utf-8",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml; charset=utf-8",
            _ => "application/octet-stream",
        }
    }
}
