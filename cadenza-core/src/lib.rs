// Cadenza
// Copyright (c) 2019-2022 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared errors, I/O primitives, and audio types used by the Cadenza decoders.

pub mod audio;
pub mod conv;
pub mod errors;
pub mod io;
