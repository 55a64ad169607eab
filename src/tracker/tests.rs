use super::*;
use crate::fixtures;
use crate::metainfo::{InfoHash, Torrent};

fn request() -> AnnounceRequest {
    AnnounceRequest {
        info_hash: InfoHash::new([0u8; 20]),
        peer_id: PeerId(*b"-PM0001-abcdefghijkl"),
        port: 51413,
        uploaded: 10,
        downloaded: 20,
        left: 30,
        event: TrackerEvent::None,
    }
}

#[test]
fn test_peer_id_generate() {
    let a = PeerId::generate();
    let b = PeerId::generate();

    assert_eq!(&a.as_bytes()[..8], b"-PM0001-");
    assert_eq!(a.client_id(), Some("PM0001"));
    assert_ne!(a, b);
}

#[test]
fn test_peer_id_from_bytes() {
    assert!(PeerId::from_bytes(&[0u8; 19]).is_none());
    assert!(PeerId::from_bytes(&[0u8; 21]).is_none());

    let id = PeerId::from_bytes(b"-UT3500-123456789012").unwrap();
    assert_eq!(id.client_id(), Some("UT3500"));
    assert_eq!(format!("{:?}", id), "PeerId(UT3500)");
}

#[test]
fn test_peer_id_without_client_tag() {
    let id = PeerId([0xff; 20]);
    assert_eq!(id.client_id(), None);
    assert_eq!(format!("{:?}", id), "PeerId(ffffffffffffffff)");
    assert!(id.to_string().starts_with("%FF%FF"));
}

#[test]
fn test_query_string() {
    let zeros = "%00".repeat(20);
    assert_eq!(
        request().query_string(),
        format!(
            "info_hash={}&peer_id=-PM0001-abcdefghijkl&port=51413&uploaded=10&downloaded=20&left=30&compact=1",
            zeros
        )
    );
}

#[test]
fn test_peer_id_display_matches_query_encoding() {
    let id = PeerId(*b"-PM0001-ab~_.\x00\xff/ 123");
    let query = AnnounceRequest {
        peer_id: id,
        ..request()
    }
    .query_string();

    assert_eq!(id.to_string(), "-PM0001-ab~_.%00%FF%2F%20123");
    assert!(query.contains(&format!("&peer_id={}&", id)));
}

#[test]
fn test_query_string_keeps_unreserved_bytes() {
    let mut hash = [b'A'; 20];
    hash[0] = b'~';
    hash[1] = b' ';
    hash[2] = b'/';
    let query = AnnounceRequest {
        info_hash: InfoHash::new(hash),
        ..request()
    }
    .query_string();

    assert!(query.starts_with("info_hash=~%20%2FAAA"));
}

#[test]
fn test_event_parameter() {
    for (event, suffix) in [
        (TrackerEvent::Started, "&event=started"),
        (TrackerEvent::Stopped, "&event=stopped"),
        (TrackerEvent::Completed, "&event=completed"),
    ] {
        assert!(request().with_event(event).query_string().ends_with(suffix));
    }
    assert!(!request().query_string().contains("event="));
}

#[test]
fn test_url_separator() {
    let url = request().url("http://t.example/announce?key=1");
    assert!(url.starts_with("http://t.example/announce?key=1&info_hash="));

    let url = request().url("http://t.example/announce");
    assert!(url.starts_with("http://t.example/announce?info_hash="));
}

#[test]
fn test_started_from_torrent() {
    let torrent = Torrent::from_bytes(&fixtures::multi_file().bytes).unwrap();
    let peer_id = PeerId::generate();
    let request = AnnounceRequest::started(&torrent, peer_id)
        .unwrap()
        .with_port(7000);

    assert_eq!(request.info_hash, torrent.info_hash().unwrap());
    assert_eq!(request.left, torrent.info.total_length());
    assert_eq!(request.port, 7000);
    assert_eq!(request.event, TrackerEvent::Started);

    let done = request.with_progress(5, torrent.info.total_length() + 1, torrent.info.total_length());
    assert_eq!(done.left, 0);
}
