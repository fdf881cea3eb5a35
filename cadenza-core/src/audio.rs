// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `audio` module provides primitives for working with decoded PCM audio.

use bitflags::bitflags;

use crate::conv::IntoSample;

bitflags! {
    /// A bitmask representing the audio channels in a signal.
    ///
    /// The first 3 channel positions match those of the channel mask in Microsoft's
    /// `WAVEFORMATEXTENSIBLE` structure.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Channels: u32 {
        /// Front-left (left) channel.
        const FRONT_LEFT   = 1 << 0;
        /// Front-right (right) channel.
        const FRONT_RIGHT  = 1 << 1;
        /// Front-centre (centre) or the Mono channel.
        const FRONT_CENTRE = 1 << 2;
    }
}

impl Channels {
    /// Gets the number of channels.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }
}

/// `SignalSpec` describes the characteristics of a Signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignalSpec {
    /// The signal sampling rate in hertz (Hz).
    pub rate: u32,

    /// The channel assignments of the signal. Samples of a frame are interleaved in the order of
    /// the channel bits, lowest bit first.
    pub channels: Channels,
}

impl SignalSpec {
    pub fn new(rate: u32, channels: Channels) -> Self {
        SignalSpec { rate, channels }
    }
}

/// A `PcmBuffer` holds a block of interleaved, signed 16-bit PCM audio frames.
#[derive(Clone, Debug)]
pub struct PcmBuffer {
    spec: SignalSpec,
    buf: Vec<i16>,
}

impl PcmBuffer {
    /// Instantiate a new, empty, `PcmBuffer` with room for `capacity` frames without
    /// reallocating.
    pub fn new(capacity: usize, spec: SignalSpec) -> Self {
        PcmBuffer { spec, buf: Vec::with_capacity(capacity * spec.channels.count()) }
    }

    /// Gets the signal specification of the buffer.
    pub fn spec(&self) -> &SignalSpec {
        &self.spec
    }

    /// Gets the number of frames in the buffer.
    pub fn frames(&self) -> usize {
        match self.spec.channels.count() {
            0 => 0,
            n => self.buf.len() / n,
        }
    }

    /// Gets all interleaved samples in the buffer.
    pub fn samples(&self) -> &[i16] {
        &self.buf
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears all frames from the buffer.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Appends planar audio, one slice per channel, converting and interleaving the samples.
    /// Every plane must have the same length and there must be exactly one plane per channel.
    pub fn append_planar<F>(&mut self, planes: &[&[F]])
    where
        F: Copy + IntoSample<i16>,
    {
        assert!(planes.len() == self.spec.channels.count());

        let n_frames = planes.first().map_or(0, |plane| plane.len());

        assert!(planes.iter().all(|plane| plane.len() == n_frames));

        self.buf.reserve(n_frames * planes.len());

        for i in 0..n_frames {
            for plane in planes {
                self.buf.push(plane[i].into_sample());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Channels, PcmBuffer, SignalSpec};

    #[test]
    fn verify_channel_count() {
        assert_eq!(Channels::FRONT_CENTRE.count(), 1);
        assert_eq!((Channels::FRONT_LEFT | Channels::FRONT_RIGHT).count(), 2);
        assert_eq!(Channels::empty().count(), 0);
    }

    #[test]
    fn verify_append_planar_interleaves() {
        let spec = SignalSpec::new(44_100, Channels::FRONT_LEFT | Channels::FRONT_RIGHT);
        let mut buf = PcmBuffer::new(4, spec);

        let left = [0.5f32, -0.5, 1.5];
        let right = [0.0f32, 0.25, -2.0];

        buf.append_planar(&[&left[..], &right[..]]);

        assert_eq!(buf.frames(), 3);
        assert_eq!(buf.samples(), &[16384, 0, -16384, 8192, i16::MAX, i16::MIN]);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.spec().rate, 44_100);
    }
}
