//! Async BOM skipping over tokio readers.

#![cfg(feature = "async")]

use bom_core::{detector::nonblocking::skip, registry};
use pretty_assertions::assert_eq;
use tokio::io::AsyncReadExt;

#[tokio::test]
async fn test_async_matches_sync_detection() {
    let inputs: &[&[u8]] = &[
        b"\x00\x00\xFE\xFF",
        b"\xFF\xFE\x00\x00",
        b"\xFE\xFF\x67\x0D\x52\xA1",
        b"\xFF\xFE\x0D\x67\xA1\x52",
        b"\xEF\xBB\xBFHello",
        b"No BOM",
        b"\x00",
        b"",
    ];

    for input in inputs {
        let (expected, rest) = registry::strip_bom(input);
        let (encoding, mut reader) = skip(*input).await.unwrap();
        assert_eq!(encoding, expected);

        let mut remaining = Vec::new();
        reader.read_to_end(&mut remaining).await.unwrap();
        assert_eq!(remaining, rest);
    }
}

#[tokio::test]
async fn test_async_chunked_reader() {
    let reader = tokio_test_reader(&[&[0xFF], &[0xFE, 0x00], &[0x00, b'z']]);
    let (encoding, mut reader) = skip(reader).await.unwrap();
    assert_eq!(encoding, registry::UTF32_LE);

    let mut remaining = Vec::new();
    reader.read_to_end(&mut remaining).await.unwrap();
    assert_eq!(remaining, b"z");
}

/// Chain several slices so each `read` returns at most one chunk
fn tokio_test_reader(chunks: &[&'static [u8]]) -> impl tokio::io::AsyncRead + Unpin {
    let mut reader: Box<dyn tokio::io::AsyncRead + Unpin> = Box::new(tokio::io::empty());
    for chunk in chunks.iter().rev() {
        reader = Box::new((*chunk).chain(reader));
    }
    reader
}
