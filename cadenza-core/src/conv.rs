// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `conv` module provides methods to convert samples between different sample types (formats).

/// `FromSample` implements a conversion from `F` to `Self`. This may be a lossy conversion.
pub trait FromSample<F> {
    fn from_sample(val: F) -> Self;
}

/// `IntoSample` implements a conversion from `Self` to `T`. This may be a lossy conversion.
///
/// This trait is automatically implemented for all types implementing `FromSample`.
pub trait IntoSample<T> {
    fn into_sample(self) -> T;
}

impl<F, T: FromSample<F>> IntoSample<T> for F {
    #[inline(always)]
    fn into_sample(self) -> T {
        T::from_sample(self)
    }
}

macro_rules! impl_convert {
    ($from:ty, $to:ty, $sample:ident, $func:expr) => {
        impl FromSample<$from> for $to {
            #[inline(always)]
            fn from_sample($sample: $from) -> Self {
                $func
            }
        }
    };
}

// Full-scale floating point samples are in the range [-1.0, 1.0]. Casting a float to an integer
// saturates, so +1.0 maps to i16::MAX and anything below -1.0 maps to i16::MIN.
impl_convert!(f32, i16, s, (s * 32_768.0) as i16);
impl_convert!(i16, f32, s, f32::from(s) / 32_768.0);
impl_convert!(i16, i16, s, s);
