// Cadenza Check Tool
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use cadenza_bundle_mp3::{DecoderOptions, Mp3Decoder, PcmSink};
use cadenza_core::audio::PcmBuffer;
use cadenza_core::errors::{Error, Result};
use cadenza_core::io::{PushbackStream, PushbackStreamOptions};

use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "Cadenza Check", version, about = "Decode an MP3 file to 16-bit PCM")]
struct Args {
    /// The input file path
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Write the decoded audio to a WAV file
    #[arg(long, short = 'o', value_name = "WAV")]
    output: Option<PathBuf>,
    /// The number of consecutive frame errors tolerated before giving up
    #[arg(
        long,
        value_name = "N",
        default_value_t = DecoderOptions::default().max_consecutive_errors
    )]
    max_errors: usize,
    /// Stop after decoding N frames
    #[arg(long, value_name = "N")]
    frames: Option<u64>,
    /// Only print the decode results
    #[arg(long, short = 'q')]
    quiet: bool,
}

/// Writes decoded blocks to a 16-bit WAV file. The file is created when the first block arrives,
/// since the signal specification is only known once the first frame is decoded.
struct WavSink {
    path: PathBuf,
    writer: Option<hound::WavWriter<BufWriter<File>>>,
}

impl WavSink {
    fn new(path: &Path) -> Self {
        WavSink { path: path.to_path_buf(), writer: None }
    }

    fn finalize(self) -> Result<()> {
        match self.writer {
            Some(writer) => writer.finalize().map_err(wav_error),
            None => Ok(()),
        }
    }
}

impl PcmSink for WavSink {
    fn write_block(&mut self, block: &PcmBuffer) -> Result<()> {
        if self.writer.is_none() {
            let spec = hound::WavSpec {
                channels: block.spec().channels.count() as u16,
                sample_rate: block.spec().rate,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            };

            self.writer = Some(hound::WavWriter::create(&self.path, spec).map_err(wav_error)?);
        }

        let writer = match self.writer.as_mut() {
            Some(writer) => writer,
            None => return Ok(()),
        };

        for &sample in block.samples() {
            writer.write_sample(sample).map_err(wav_error)?;
        }

        Ok(())
    }
}

/// Discards decoded blocks.
struct NullSink;

impl PcmSink for NullSink {
    fn write_block(&mut self, _: &PcmBuffer) -> Result<()> {
        Ok(())
    }
}

fn wav_error(err: hound::Error) -> Error {
    match err {
        hound::Error::IoError(err) => Error::IoError(err),
        err => Error::IoError(io::Error::new(io::ErrorKind::Other, err)),
    }
}

fn run(args: &Args) -> Result<u64> {
    let file = File::open(&args.input)?;

    let stream = PushbackStream::new(file, PushbackStreamOptions::default());

    let options = DecoderOptions { max_consecutive_errors: args.max_errors };

    let mut decoder = Mp3Decoder::new(stream, options);

    let mut n_frames = 0;

    let should_stop = || {
        n_frames += 1;
        args.frames.map_or(false, |max| n_frames > max)
    };

    let n_samples = match &args.output {
        Some(path) => {
            let mut sink = WavSink::new(path);
            let n_samples = decoder.decode_all(&mut sink, should_stop)?;
            sink.finalize()?;
            n_samples
        }
        None => decoder.decode_all(&mut NullSink, should_stop)?,
    };

    if let Some(stream_info) = decoder.stream_info() {
        info!("stream info: {:?}", stream_info);

        if !args.quiet {
            println!("  Version:     {:?}", stream_info.version);
            println!("  Sample Rate: {} Hz", stream_info.spec.rate);
            println!("  Channels:    {}", stream_info.spec.channels.count());
            println!("  VBR:         {}", stream_info.is_vbr);
            println!();
        }
    }

    Ok(n_samples)
}

fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    if !args.quiet {
        println!("Input Path: {}", args.input.display());
        println!();
    }

    let ret = match run(&args) {
        Ok(n_samples) => {
            println!("Decoded {} samples per channel", n_samples);
            0
        }
        Err(Error::CorruptStream(n_errors)) => {
            eprintln!("Stream is corrupt: {} consecutive frames failed to decode", n_errors);
            1
        }
        Err(err) => {
            eprintln!("Decode interrupted by error: {}", err);
            2
        }
    };

    std::process::exit(ret);
}
