/// Tests for incremental hashing (new, update, digest, clone)
use whirlpool_rs::hash::format::to_hex;
use whirlpool_rs::hash::whirlpool::{BitLength, Whirlpool, hash};

const EMPTY: &str = "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7\
                     3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3";
const FOX: &str = "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725f\
                   d2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35";
const FOX_EOG: &str = "c27ba124205f72e6847f3e19834f925cc666d0974167af915bb462420ed40cc5\
                       0900d85a1f923219d832357750492d5c143011a76988344c2635e69d06f2d38c";
const TQBF: &str = "317edc3c5172ea5987902aa9c4f1defedf4d5aa59209bdf7574cc6da0039852c\
                    24b8da70ecb07997ff83e86d32d2851215d3dcbd6bb9736bdef21c349d483e6d";

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn test_update_single_chunk() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"The quick brown fox jumps over the lazy dog");
    assert_eq!(hasher.hexdigest(), FOX);
}

#[test]
fn test_update_multiple_chunks() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"The quick brown fox");
    hasher.update(b" jumps over the lazy dog");
    assert_eq!(hasher.hexdigest(), FOX);
}

#[test]
fn test_every_split_point() {
    let data = message(200);
    let expected = hash(&data);

    for split in 0..=data.len() {
        let (a, b) = data.split_at(split);
        let mut hasher = Whirlpool::new();
        hasher.update(a);
        hasher.update(b);
        assert_eq!(hasher.digest(), expected, "split at {}", split);
    }
}

#[test]
fn test_byte_at_a_time_and_odd_chunks() {
    let data = message(333);
    let expected = hash(&data);

    let mut bytewise = Whirlpool::new();
    for byte in &data {
        bytewise.update(std::slice::from_ref(byte));
    }
    assert_eq!(bytewise.digest(), expected);

    for chunk_size in [3, 17, 63, 64, 65, 100] {
        let mut hasher = Whirlpool::new();
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk);
            hasher.update(&[]);
        }
        assert_eq!(hasher.digest(), expected, "chunk size {}", chunk_size);
    }
}

#[test]
fn test_digest_is_repeatable() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"The quick brown fox");
    assert_eq!(hasher.digest(), hasher.digest());
    assert_eq!(hasher.hexdigest(), TQBF);
    assert_eq!(hasher.hexdigest(), TQBF);
}

#[test]
fn test_update_after_digest_continues() {
    let mut hasher = Whirlpool::new();
    assert_eq!(hasher.hexdigest(), EMPTY);

    hasher.update(b"The quick brown fox");
    assert_eq!(hasher.hexdigest(), TQBF);

    hasher.update(b" jumps over the lazy dog");
    assert_eq!(hasher.hexdigest(), FOX);
}

#[test]
fn test_clone_independence() {
    let mut wp1 = Whirlpool::new();
    let wp2 = wp1.clone();
    wp1.update(b"The quick brown fox");
    let mut wp3 = wp1.clone();

    assert_eq!(wp1.hexdigest(), TQBF);
    assert_eq!(wp2.hexdigest(), EMPTY);
    assert_eq!(wp3.hexdigest(), TQBF);

    wp1.update(b" jumps over the lazy dog");
    assert_eq!(wp1.hexdigest(), FOX);
    assert_eq!(wp2.hexdigest(), EMPTY);
    assert_eq!(wp3.hexdigest(), TQBF);

    wp3.update(b" jumps over the lazy eog");
    assert_eq!(wp1.hexdigest(), FOX);
    assert_eq!(wp2.hexdigest(), EMPTY);
    assert_eq!(wp3.hexdigest(), FOX_EOG);
}

#[test]
fn test_clone_mid_block() {
    let data = message(150);
    let mut hasher = Whirlpool::new();
    hasher.update(&data[..90]);

    let mut fork = hasher.clone();
    fork.update(b"different tail");
    hasher.update(&data[90..]);

    assert_eq!(hasher.digest(), hash(&data));
    let mut diverged = data[..90].to_vec();
    diverged.extend_from_slice(b"different tail");
    assert_eq!(fork.digest(), hash(&diverged));
}

#[test]
fn test_bit_length_tracking() {
    let mut hasher = Whirlpool::new();
    hasher.update(&message(10));
    hasher.update(&message(100));
    assert_eq!(hasher.bit_length(), BitLength::from(110 * 8));

    let _ = hasher.digest();
    assert_eq!(hasher.bit_length(), BitLength::from(110 * 8));
}

#[test]
fn test_io_write() {
    use std::io::Write;

    let mut hasher = Whirlpool::new();
    write!(hasher, "The quick brown fox").unwrap();
    hasher.write_all(b" jumps over the lazy dog").unwrap();
    hasher.flush().unwrap();
    assert_eq!(hasher.hexdigest(), FOX);
}

#[test]
fn test_digest_trait() {
    use digest::Digest;

    let expected = hash(b"abc");
    let one_shot = <Whirlpool as Digest>::digest(b"abc");
    assert_eq!(one_shot.as_slice(), &expected);

    let mut hasher = <Whirlpool as Digest>::new();
    Digest::update(&mut hasher, b"ab");
    Digest::update(&mut hasher, b"c");
    assert_eq!(to_hex(&hasher.finalize()), to_hex(&expected));
    assert_eq!(<Whirlpool as Digest>::output_size(), 64);
}

#[test]
fn test_digest_reset() {
    use digest::Reset;

    let mut hasher = Whirlpool::new();
    hasher.update(b"discarded");
    Reset::reset(&mut hasher);
    assert_eq!(hasher, Whirlpool::new());
    assert_eq!(hasher.hexdigest(), EMPTY);
}

#[test]
fn test_independent_contexts_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                let data = message(1000 + n);
                let mut hasher = Whirlpool::new();
                for chunk in data.chunks(37) {
                    hasher.update(chunk);
                }
                (n, hasher.digest())
            })
        })
        .collect();

    for handle in handles {
        let (n, digest) = handle.join().unwrap();
        assert_eq!(digest, hash(&message(1000 + n)));
    }
}
