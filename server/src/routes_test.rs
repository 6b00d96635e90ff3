use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn serve(router: Router) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn get_raw(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn temp_site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("ragmini-host-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let root = temp_site_root("healthz");
    let addr = serve(host_routes(&root)).await;

    let response = get_raw(addr, "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
}

#[tokio::test]
async fn pkg_serves_bundle_files() {
    let root = temp_site_root("pkg");
    std::fs::write(root.join("pkg").join("ragmini.css"), "body { margin: 0; }").unwrap();
    let addr = serve(host_routes(&root)).await;

    let response = get_raw(addr, "/pkg/ragmini.css").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("body { margin: 0; }"), "{response}");
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let root = temp_site_root("missing");
    let addr = serve(host_routes(&root)).await;

    let response = get_raw(addr, "/pkg/absent.wasm").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}
