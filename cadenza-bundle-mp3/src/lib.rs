// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A pure Rust, streaming MPEG-1, MPEG-2, and MPEG-2.5 audio layer 3 decoder.
//!
//! `Mp3Decoder` reads frames from any byte stream implementing `ReadBytes` and `Pushback`, and
//! decodes each into a block of interleaved 16-bit PCM.

// Shared modules.
mod common;
mod header;
mod reader;
mod reservoir;

// Decoder modules.
mod decoder;
mod layer3;
mod synthesis;

pub use common::{ChannelMode, Emphasis, FrameHeader, Mode, MpegVersion};
pub use decoder::{DecoderOptions, Mp3Decoder, PcmSink, StreamInfo};
pub use header::{detect_vbr_tag, parse_frame_header, VbrTag};
pub use reader::{skip_id3v2, Frame, FrameReader};
