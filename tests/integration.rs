// SPDX-License-Identifier: MPL-2.0
//! End-to-end loader tests over a loopback HTTP listener.
//!
//! Each test serves one canned response from a real TCP socket, so the full
//! reqwest round-trip is exercised without touching the network.

use futures_util::StreamExt;
use iced_peek::fetch::ImageLoader;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode test png");
    bytes
}

/// Serves one canned HTTP response on a loopback port, then closes.
fn serve_once(status_line: &str, content_type: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has no local addr");

    let status_line = status_line.to_string();
    let content_type = content_type.to_string();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head before responding.
            let mut head = Vec::new();
            let mut buf = [0_u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/image")
}

/// A loopback URL with nothing listening behind it.
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    drop(listener);

    format!("http://{addr}/image")
}

#[tokio::test(flavor = "multi_thread")]
async fn async_download_displays_decoded_bytes() {
    let body = png_bytes(5, 4);
    let url = serve_once("200 OK", "image/png", body.clone());

    let image = ImageLoader::new(url)
        .download()
        .await
        .expect("transport should succeed")
        .expect("2xx with valid body should produce an image");

    assert_eq!(image.width, 5);
    assert_eq!(image.height, 4);

    let reference = image_rs::load_from_memory(&body)
        .expect("reference decode")
        .to_rgba8();
    assert_eq!(image.rgba_bytes(), reference.as_raw().as_slice());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_2xx_status_yields_no_image() {
    // The body is a perfectly valid image; the status alone must reject it.
    let url = serve_once("404 Not Found", "image/png", png_bytes(5, 4));

    let result = ImageLoader::new(url)
        .download()
        .await
        .expect("transport should succeed");

    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_body_yields_no_image() {
    let url = serve_once("200 OK", "text/html", b"<html>oops</html>".to_vec());

    let result = ImageLoader::new(url)
        .download()
        .await
        .expect("transport should succeed");

    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_is_an_error_not_a_panic() {
    let result = ImageLoader::new(refused_url()).download().await;

    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn callback_style_delivers_the_result_once() {
    let url = serve_once("200 OK", "image/png", png_bytes(2, 2));

    let (tx, rx) = tokio::sync::oneshot::channel();
    ImageLoader::new(url).download_with_callback(move |result| {
        let _ = tx.send(result);
    });

    let image = rx
        .await
        .expect("callback should fire")
        .expect("transport should succeed")
        .expect("2xx with valid body should produce an image");
    assert_eq!(image.width, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn callback_style_reports_transport_failure() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    ImageLoader::new(refused_url()).download_with_callback(move |result| {
        let _ = tx.send(result);
    });

    let result = rx.await.expect("callback should fire");
    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn stream_style_yields_a_single_outcome() {
    let url = serve_once("200 OK", "image/png", png_bytes(2, 3));

    let mut stream = Box::pin(ImageLoader::new(url).download_stream());

    let image = stream
        .next()
        .await
        .expect("stream should yield one item")
        .expect("transport should succeed")
        .expect("2xx with valid body should produce an image");
    assert_eq!(image.height, 3);

    assert!(stream.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn stream_style_collapses_bad_status_to_none() {
    let url = serve_once("500 Internal Server Error", "image/png", png_bytes(2, 3));

    let mut stream = Box::pin(ImageLoader::new(url).download_stream());

    let outcome = stream
        .next()
        .await
        .expect("stream should yield one item")
        .expect("transport should succeed");
    assert!(outcome.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn all_styles_agree_on_the_same_response() {
    let body = png_bytes(4, 4);

    let async_image = {
        let url = serve_once("200 OK", "image/png", body.clone());
        ImageLoader::new(url)
            .download()
            .await
            .expect("transport")
            .expect("image")
    };

    let stream_image = {
        let url = serve_once("200 OK", "image/png", body.clone());
        let mut stream = Box::pin(ImageLoader::new(url).download_stream());
        stream
            .next()
            .await
            .expect("one item")
            .expect("transport")
            .expect("image")
    };

    let callback_image = {
        let url = serve_once("200 OK", "image/png", body);
        let (tx, rx) = tokio::sync::oneshot::channel();
        ImageLoader::new(url).download_with_callback(move |result| {
            let _ = tx.send(result);
        });
        rx.await
            .expect("callback")
            .expect("transport")
            .expect("image")
    };

    assert_eq!(async_image.rgba_bytes(), stream_image.rgba_bytes());
    assert_eq!(stream_image.rgba_bytes(), callback_image.rgba_bytes());
}
