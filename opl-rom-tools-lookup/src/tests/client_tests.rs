use super::*;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Serve a single canned HTTP response and report the request line.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut header = String::new();
        while reader.read_line(&mut header).unwrap() > 2 {
            header.clear();
        }
        tx.send(request_line.trim_end().to_string()).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{}", addr), rx)
}

/// Client for the loopback test server, ignoring any proxy in the environment.
fn local_client(base: String) -> RedumpClient {
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    RedumpClient::with_http_client(http, base)
}

#[test]
fn test_quicksearch_url() {
    let client = RedumpClient::with_base_url("http://redump.example/").unwrap();
    assert_eq!(client.base_url(), "http://redump.example");
    assert_eq!(
        client.quicksearch_url("SCES-12345"),
        "http://redump.example/discs/quicksearch/SCES-12345/"
    );
}

#[test]
fn test_default_base_url() {
    let client = RedumpClient::new().unwrap();
    assert_eq!(
        client.quicksearch_url("SLUS-20062"),
        "http://redump.org/discs/quicksearch/SLUS-20062/"
    );
}

#[test]
fn test_resolve_title_success() {
    let (base, requests) = serve_once("200 OK", "<html><body><h1>Example Game</h1></body></html>");
    let client = local_client(base);

    let title = client.resolve_title("SCES-12345").unwrap();
    assert_eq!(title, "Example Game");
    assert_eq!(
        requests.recv().unwrap(),
        "GET /discs/quicksearch/SCES-12345/ HTTP/1.1"
    );
}

#[test]
fn test_resolve_title_bad_status() {
    let (base, _requests) = serve_once("404 Not Found", "<h1>Not Found</h1>");
    let client = local_client(base);

    let err = client.resolve_title("SCES-12345").unwrap_err();
    assert!(matches!(
        err,
        LookupError::Status { status: 404, ref serial } if serial == "SCES-12345"
    ));
}

#[test]
fn test_resolve_title_missing_in_body() {
    let (base, _requests) = serve_once("200 OK", "<html><body><p>No results</p></body></html>");
    let client = local_client(base);

    let err = client.resolve_title("SCES-12345").unwrap_err();
    assert!(matches!(err, LookupError::TitleNotFound(_)));
}

#[test]
fn test_resolve_title_transport_failure() {
    // Bind then drop to get a port nothing is listening on
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = local_client(format!("http://{}", addr));

    let err = client.resolve_title("SCES-12345").unwrap_err();
    assert!(matches!(err, LookupError::Http(_)));
}
