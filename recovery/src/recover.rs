// Copyright (c) Facebook, Inc. and its affiliates.
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use env_logger::Env;
use recovery::command::{run, RecoverOpt};
use structopt::StructOpt;

fn main() -> Result<()> {
    let options = RecoverOpt::from_args();
    env_logger::Builder::from_env(Env::default().default_filter_or(options.log_level()))
        .format_timestamp_millis()
        .init();

    run(&options)?;
    Ok(())
}
