use std::path::{Path, PathBuf};

use ikemen_lab_sff::SffFile;

use crate::CliError;

/// Run the portrait command: decode a sprite and write it as PNG.
pub(crate) fn run_portrait(
    path: &Path,
    group: Option<u16>,
    item: Option<u16>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut sff = SffFile::from_path(path)?;

    let index = match (group, item) {
        (Some(g), Some(i)) => sff
            .find(g, i)
            .ok_or_else(|| CliError::other(format!("sprite {},{} not found", g, i)))?,
        (None, None) => sff
            .portrait_info()
            .map(|(index, _)| index)
            .ok_or_else(|| CliError::other("no portrait sprite (group 9000) in this file"))?,
        _ => {
            return Err(CliError::other(
                "--group and --item must be given together",
            ));
        }
    };

    let sprite = sff.decode(index)?;
    let rgba = sprite
        .rgba()
        .ok_or_else(|| CliError::other("sprite has no palette to render with"))?;

    let out = output.unwrap_or_else(|| path.with_extension("png"));
    let image =
        image::RgbaImage::from_raw(sprite.width as u32, sprite.height as u32, rgba)
            .ok_or_else(|| CliError::other("sprite dimensions don't match pixel data"))?;
    image
        .save(&out)
        .map_err(|e| CliError::other(format!("failed to write {}: {}", out.display(), e)))?;

    log::info!(
        "Wrote {} ({}x{}, sprite {},{})",
        out.display(),
        sprite.width,
        sprite.height,
        sprite.group,
        sprite.item
    );
    Ok(())
}
