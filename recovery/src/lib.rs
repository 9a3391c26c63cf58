// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod config;
pub mod render;
