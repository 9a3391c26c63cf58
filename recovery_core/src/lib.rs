// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

#[macro_use]
pub mod error;

pub mod base_types;
pub mod polynomial;
pub mod rational;
pub mod reconstruction;
pub mod shares;
pub mod verifier;
