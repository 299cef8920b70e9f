//! Fuzz target: `codec::decode` / `codec::decode_all`
//!
//! Drives arbitrary byte sequences through the frame decoder and checks
//! that it never panics, never claims more bytes than it was given, and
//! that every decoded command re-encodes to the bytes it came from.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use unicorn_eta::pixel::ChannelOrder;
use unicorn_eta::protocol::codec::{decode, decode_all, encode};

fuzz_target!(|data: &[u8]| {
    for order in [ChannelOrder::Grb, ChannelOrder::Rgb] {
        if let Ok((cmd, used)) = decode(data, order) {
            assert!(used >= 1 && used <= data.len(), "decoder overran input");
            assert_eq!(&encode(&cmd, order)[..], &data[..used]);
        }
        let _ = decode_all(data, order);
    }
});
