use poem::{endpoint::make_sync, web::Html, Endpoint};

const INDEX_HTML: &str = include_str!("../web/index.html");

pub fn render_index(api_prefix: &str) -> String {
    INDEX_HTML.replace("{{API_PREFIX}}", api_prefix.trim_end_matches('/'))
}

pub fn index_endpoint(api_prefix: &str) -> impl Endpoint {
    let page = render_index(api_prefix);
    make_sync(move |_| Html(page.clone()))
}
