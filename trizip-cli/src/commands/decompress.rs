//! Decompress command implementation.

use super::{Method, transcode};
use crate::naming::{decompressed_name, detect_method};
use crate::utils::{create_progress_bar, file_name, output_path};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use trizip_lzw::LzwConfig;

pub fn cmd_decompress(
    files: &[PathBuf],
    method: Option<Method>,
    output_dir: Option<&Path>,
    config: LzwConfig,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_progress_bar(files.len() as u64, files.len() > 1);

    for input in files {
        let name = file_name(input)?;
        pb.set_message(name.to_string());

        let method = match method {
            Some(method) => method,
            None => detect_method(name)?,
        };
        let output = output_path(input, &decompressed_name(name, method)?, output_dir);
        info!("{} {} -> {}", method, input.display(), output.display());
        transcode(input, &output, force, |r, w| method.decode(r, w, config))?;

        let out_size = fs::metadata(&output)?.len();
        pb.suspend(|| {
            println!(
                "{} -> {} ({} bytes)",
                input.display(),
                output.display(),
                out_size
            )
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}
