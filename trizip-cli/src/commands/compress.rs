//! Compress command implementation.

use super::{Method, transcode};
use crate::naming::compressed_name;
use crate::utils::{create_progress_bar, file_name, output_path, ratio_percent};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use trizip_lzw::LzwConfig;

pub fn cmd_compress(
    files: &[PathBuf],
    method: Method,
    output_dir: Option<&Path>,
    config: LzwConfig,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_progress_bar(files.len() as u64, files.len() > 1);

    for input in files {
        let name = file_name(input)?;
        pb.set_message(name.to_string());

        let output = output_path(input, &compressed_name(name, method), output_dir);
        info!("{} {} -> {}", method, input.display(), output.display());
        transcode(input, &output, force, |r, w| method.encode(r, w, config))?;

        let in_size = fs::metadata(input)?.len();
        let out_size = fs::metadata(&output)?.len();
        pb.suspend(|| {
            println!(
                "{} -> {} ({} -> {} bytes, {:.1}%)",
                input.display(),
                output.display(),
                in_size,
                out_size,
                ratio_percent(in_size, out_size)
            )
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}
