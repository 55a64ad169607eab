//! Hand-assembled torrent files for tests.
//!
//! The bytes are written out key by key in canonical order instead of going
//! through the crate's own encoder, so round-trip tests compare against an
//! independent rendering.

use sha1::{Digest, Sha1};

pub(crate) const SINGLE_PIECE_LENGTH: u64 = 524_288;
pub(crate) const SINGLE_PIECE_COUNT: usize = 1526;
pub(crate) const MULTI_PIECE_LENGTH: u64 = 262_144;
pub(crate) const MULTI_PIECE_COUNT: usize = 1090;

pub(crate) struct Fixture {
    pub bytes: Vec<u8>,
    pub info_bytes: Vec<u8>,
}

fn string(out: &mut Vec<u8>, payload: &[u8]) {
    out.extend_from_slice(format!("{}:", payload.len()).as_bytes());
    out.extend_from_slice(payload);
}

fn integer(out: &mut Vec<u8>, n: u64) {
    out.extend_from_slice(format!("i{}e", n).as_bytes());
}

pub(crate) fn piece_hashes(count: usize) -> Vec<u8> {
    (0..count as u32)
        .flat_map(|i| {
            let digest: [u8; 20] = Sha1::digest(i.to_be_bytes()).into();
            digest
        })
        .collect()
}

fn wrap(info_bytes: Vec<u8>) -> Fixture {
    let mut out = Vec::new();
    out.push(b'd');
    string(&mut out, b"announce");
    string(&mut out, b"http://tracker.example.org:6969/announce");
    string(&mut out, b"announce-list");
    out.extend_from_slice(b"ll");
    string(&mut out, b"http://tracker.example.org:6969/announce");
    out.extend_from_slice(b"el");
    string(&mut out, b"udp://backup.example.net:1337/announce");
    string(&mut out, b"http://tracker.example.org:6969/announce");
    out.extend_from_slice(b"ee");
    string(&mut out, b"comment");
    string(&mut out, b"fixture torrent");
    string(&mut out, b"created by");
    string(&mut out, b"mktorrent 1.1");
    string(&mut out, b"creation date");
    integer(&mut out, 1_452_468_725);
    string(&mut out, b"info");
    out.extend_from_slice(&info_bytes);
    out.push(b'e');
    Fixture {
        bytes: out,
        info_bytes,
    }
}

/// Returns the file lengths of [`single_file`]: one file that ends part-way
/// through its last piece.
pub(crate) fn single_file_length() -> u64 {
    (SINGLE_PIECE_COUNT as u64 - 1) * SINGLE_PIECE_LENGTH + 300_000
}

/// A single-file torrent with 1526 pieces of 512 KiB.
pub(crate) fn single_file() -> Fixture {
    let mut info = Vec::new();
    info.push(b'd');
    string(&mut info, b"length");
    integer(&mut info, single_file_length());
    string(&mut info, b"name");
    string(&mut info, b"debian-8.3.0-amd64-netinst.iso");
    string(&mut info, b"piece length");
    integer(&mut info, SINGLE_PIECE_LENGTH);
    string(&mut info, b"pieces");
    string(&mut info, &piece_hashes(SINGLE_PIECE_COUNT));
    info.push(b'e');
    wrap(info)
}

/// Paths and lengths of the ten files in [`multi_file`].
///
/// Small files sit between large ones so that several pieces span more
/// than two files.
pub(crate) fn multi_file_entries() -> Vec<(Vec<&'static str>, u64)> {
    let mut files = vec![
        (vec!["disc1", "01 - Overture.flac"], 100_000_000),
        (vec!["disc1", "cover.txt"], 1_000),
        (vec!["disc1", "02 - Allegro.flac"], 50_000_000),
        (vec!["disc1", "booklet.pdf"], MULTI_PIECE_LENGTH),
        (vec!["disc2", "01 - Adagio.flac"], 30_000_000),
        (vec!["disc2", "empty.nfo"], 7),
        (vec!["disc2", "02 - Scherzo.flac"], 60_000_000),
        (vec!["disc2", "03 - Finale.flac"], 12_345_678),
        (vec!["extras", "video", "interview.mkv"], 20_000_000),
        (vec!["README"], 0),
    ];
    let total = (MULTI_PIECE_COUNT as u64 - 1) * MULTI_PIECE_LENGTH + 12_345;
    let used: u64 = files.iter().map(|(_, len)| len).sum();
    if let Some(last) = files.last_mut() {
        last.1 = total - used;
    }
    files
}

/// A ten-file torrent with 1090 pieces of 256 KiB.
pub(crate) fn multi_file() -> Fixture {
    let mut info = Vec::new();
    info.push(b'd');
    string(&mut info, b"files");
    info.push(b'l');
    for (path, length) in multi_file_entries() {
        info.push(b'd');
        string(&mut info, b"length");
        integer(&mut info, length);
        string(&mut info, b"path");
        info.push(b'l');
        for segment in path {
            string(&mut info, segment.as_bytes());
        }
        info.extend_from_slice(b"ee");
    }
    info.push(b'e');
    string(&mut info, b"name");
    string(&mut info, b"Symphony No. 9");
    string(&mut info, b"piece length");
    integer(&mut info, MULTI_PIECE_LENGTH);
    string(&mut info, b"pieces");
    string(&mut info, &piece_hashes(MULTI_PIECE_COUNT));
    info.push(b'e');
    wrap(info)
}
