pub mod products;

pub async fn health() -> &'static str {
    "OK"
}
