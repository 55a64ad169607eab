//! Decoders from the metainfo dictionary and encoders back to it.

use std::collections::BTreeMap;

use bytes::Bytes;

use super::error::MetainfoError;
use super::torrent::{FileInfo, Torrent, TorrentInfo};
use crate::bencode::Value;
use crate::constants::PIECE_HASH_LEN;
use crate::decoder::{bytes, field, int, list, one_of, string, success, Decoder};

/// Field values as they come off the wire, before cross-field checks.
#[derive(Debug, Clone, Default)]
pub(super) struct TorrentDraft {
    announce: String,
    announce_list: Vec<Vec<String>>,
    comment: String,
    created_by: String,
    creation_date: i64,
    info: InfoDraft,
}

#[derive(Debug, Clone, Default)]
pub(super) struct InfoDraft {
    piece_length: i64,
    pieces: Bytes,
    layout: Layout,
}

#[derive(Debug, Clone)]
enum Layout {
    Single { name: String, length: i64 },
    Multi { name: String, files: Vec<FileDraft> },
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Single {
            name: String::new(),
            length: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct FileDraft {
    path: Vec<String>,
    length: i64,
}

pub(super) fn torrent() -> Decoder<TorrentDraft> {
    field("announce", string(), |announce| {
        let draft = TorrentDraft {
            announce,
            ..Default::default()
        };
        field("announce-list", list(list(string())), move |announce_list| {
            let draft = TorrentDraft {
                announce_list,
                ..draft.clone()
            };
            field("comment", string(), move |comment| {
                let draft = TorrentDraft {
                    comment,
                    ..draft.clone()
                };
                field("created by", string(), move |created_by| {
                    let draft = TorrentDraft {
                        created_by,
                        ..draft.clone()
                    };
                    field("creation date", int(), move |creation_date| {
                        let draft = TorrentDraft {
                            creation_date,
                            ..draft.clone()
                        };
                        field("info", info(), move |info| {
                            success(TorrentDraft {
                                info,
                                ..draft.clone()
                            })
                        })
                    })
                })
            })
        })
    })
}

fn info() -> Decoder<InfoDraft> {
    field("piece length", int(), |piece_length| {
        field("pieces", bytes(), move |pieces| {
            one_of(single_file(), vec![multi_file()]).map(move |layout| InfoDraft {
                piece_length,
                pieces: pieces.clone(),
                layout,
            })
        })
    })
}

fn single_file() -> Decoder<Layout> {
    field("name", string(), |name| {
        field("length", int(), move |length| {
            success(Layout::Single {
                name: name.clone(),
                length,
            })
        })
    })
}

fn multi_file() -> Decoder<Layout> {
    field("name", string(), |name| {
        field("files", list(file()), move |files| {
            success(Layout::Multi {
                name: name.clone(),
                files,
            })
        })
    })
}

fn file() -> Decoder<FileDraft> {
    field("length", int(), |length| {
        field("path", list(string()), move |path| success(FileDraft { path, length }))
    })
}

/// Applies the checks the decoders cannot express as type mismatches.
pub(super) fn validate(draft: TorrentDraft) -> Result<Torrent, MetainfoError> {
    Ok(Torrent {
        announce: draft.announce,
        announce_list: draft.announce_list,
        comment: draft.comment,
        created_by: draft.created_by,
        creation_date: draft.creation_date,
        info: validate_info(draft.info)?,
    })
}

fn validate_info(draft: InfoDraft) -> Result<TorrentInfo, MetainfoError> {
    let piece_length = u64::try_from(draft.piece_length)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            MetainfoError::InvalidFile(format!(
                "piece length must be positive, got {}",
                draft.piece_length
            ))
        })?;

    let pieces = split_piece_hashes(&draft.pieces)?;

    Ok(match draft.layout {
        Layout::Single { name, length } => TorrentInfo::SingleFile {
            piece_length,
            pieces,
            file: FileInfo {
                length: file_length(&name, length)?,
                path: vec![name],
            },
        },
        Layout::Multi { name, files } => TorrentInfo::MultiFile {
            piece_length,
            pieces,
            dir_name: name,
            files: files
                .into_iter()
                .map(|f| {
                    if f.path.is_empty() {
                        return Err(MetainfoError::InvalidFile(
                            "file entry with an empty path".into(),
                        ));
                    }
                    Ok(FileInfo {
                        length: file_length(&f.path.join("/"), f.length)?,
                        path: f.path,
                    })
                })
                .collect::<Result<_, _>>()?,
        },
    })
}

fn file_length(name: &str, length: i64) -> Result<u64, MetainfoError> {
    u64::try_from(length).map_err(|_| {
        MetainfoError::InvalidFile(format!("file {} has negative length {}", name, length))
    })
}

fn split_piece_hashes(blob: &[u8]) -> Result<Vec<[u8; PIECE_HASH_LEN]>, MetainfoError> {
    if blob.len() % PIECE_HASH_LEN != 0 {
        return Err(MetainfoError::InvalidFile(format!(
            "pieces is {} bytes, not a multiple of {}",
            blob.len(),
            PIECE_HASH_LEN
        )));
    }

    Ok(blob
        .chunks_exact(PIECE_HASH_LEN)
        .map(|chunk| {
            let mut arr = [0u8; PIECE_HASH_LEN];
            arr.copy_from_slice(chunk);
            arr
        })
        .collect())
}

fn entry(dict: &mut BTreeMap<Value, Value>, key: &str, value: impl Into<Value>) {
    dict.insert(Value::string(key), value.into());
}

// Lengths are u64 in the model but bencode integers here are i64.
fn integer(n: u64, what: &str) -> Result<Value, MetainfoError> {
    i64::try_from(n).map(Value::Integer).map_err(|_| {
        MetainfoError::InvalidFile(format!("{} {} does not fit in a bencode integer", what, n))
    })
}

fn text_list(items: &[String]) -> Value {
    Value::List(items.iter().map(|s| Value::string(s.as_str())).collect())
}

pub(super) fn torrent_to_value(torrent: &Torrent) -> Result<Value, MetainfoError> {
    let mut dict = BTreeMap::new();

    let tiers: Vec<Value> = torrent
        .announce_list
        .iter()
        .map(|tier| text_list(tier))
        .collect();

    entry(&mut dict, "announce", torrent.announce.as_str());
    entry(&mut dict, "announce-list", tiers);
    entry(&mut dict, "comment", torrent.comment.as_str());
    entry(&mut dict, "created by", torrent.created_by.as_str());
    entry(&mut dict, "creation date", torrent.creation_date);
    entry(&mut dict, "info", info_to_value(&torrent.info)?);

    Ok(Value::Dict(dict))
}

pub(super) fn info_to_value(info: &TorrentInfo) -> Result<Value, MetainfoError> {
    let mut dict = BTreeMap::new();

    entry(
        &mut dict,
        "piece length",
        integer(info.piece_length(), "piece length")?,
    );
    entry(&mut dict, "pieces", Value::bytes(info.pieces().concat()));
    entry(&mut dict, "name", info.name());

    match info {
        TorrentInfo::SingleFile { file, .. } => {
            entry(&mut dict, "length", integer(file.length, "length")?);
        }
        TorrentInfo::MultiFile { files, .. } => {
            let files = files
                .iter()
                .map(|f| {
                    let mut file = BTreeMap::new();
                    entry(&mut file, "length", integer(f.length, "length")?);
                    entry(&mut file, "path", text_list(&f.path));
                    Ok(Value::Dict(file))
                })
                .collect::<Result<Vec<Value>, MetainfoError>>()?;
            entry(&mut dict, "files", files);
        }
    }

    Ok(Value::Dict(dict))
}
