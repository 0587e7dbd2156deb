//! Uncompressed 24-bit BMP export.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
//! bottom-up in BGR order, each padded with zeros to a multiple of 4 bytes.
//! All integers are little-endian.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{Canvas, ExportError};

/// Size of both headers together, and the offset of the pixel data.
pub const BMP_HEADER_SIZE: u32 = 54;

const DIB_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

impl Canvas {
    /// Bytes per padded pixel row.
    pub fn bmp_row_size(&self) -> usize {
        (self.width() * 3 + 3) / 4 * 4
    }

    /// Total size of the encoded BMP file in bytes.
    pub fn bmp_file_size(&self) -> usize {
        BMP_HEADER_SIZE as usize + self.bmp_row_size() * self.height()
    }

    /// Encode the pixel grid as a BMP into `writer`.
    pub fn write_bmp<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let image_size = to_u32(self.bmp_row_size() * self.height())?;
        let file_size = BMP_HEADER_SIZE
            .checked_add(image_size)
            .ok_or_else(too_large)?;
        let width = i32::try_from(self.width()).map_err(|_| too_large())?;
        let height = i32::try_from(self.height()).map_err(|_| too_large())?;

        // File header
        writer.write_all(b"BM")?;
        writer.write_all(&file_size.to_le_bytes())?;
        writer.write_all(&[0; 4])?;
        writer.write_all(&BMP_HEADER_SIZE.to_le_bytes())?;

        // BITMAPINFOHEADER
        writer.write_all(&DIB_HEADER_SIZE.to_le_bytes())?;
        writer.write_all(&width.to_le_bytes())?;
        writer.write_all(&height.to_le_bytes())?;
        writer.write_all(&1u16.to_le_bytes())?;
        writer.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
        writer.write_all(&0u32.to_le_bytes())?;
        writer.write_all(&image_size.to_le_bytes())?;
        writer.write_all(&[0; 16])?;

        let mut row = vec![0u8; self.bmp_row_size()];
        for y in (0..self.height()).rev() {
            let start = y * self.width();
            for (x, color) in self.pixels[start..start + self.width()].iter().enumerate() {
                row[x * 3] = color.b;
                row[x * 3 + 1] = color.g;
                row[x * 3 + 2] = color.r;
            }
            writer.write_all(&row)?;
        }
        Ok(())
    }

    /// Encode the pixel grid as BMP bytes.
    pub fn to_bmp_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.bmp_file_size());
        // Only oversized canvases fail when writing into a Vec.
        if self.write_bmp(&mut bytes).is_err() {
            bytes.clear();
        }
        bytes
    }

    /// Write the canvas to a BMP file at `path`.
    pub fn export_bmp<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|e| ExportError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_bmp(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| ExportError::io(path, e))?;
        tracing::debug!(path = %path.display(), "wrote bmp");
        Ok(())
    }
}

fn to_u32(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| too_large())
}

fn too_large() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "canvas too large for BMP")
}
