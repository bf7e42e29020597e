use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, DynamicImage, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How an image file should be read
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageKind {
    /// A JPEG file; RGB JPEGs are embedded without re-encoding
    Jpeg,
    /// Anything the `image` crate can decode
    Other,
}

impl FromStr for ImageKind {
    type Err = std::convert::Infallible;

    /// `jpg` and `jpeg` (in any case) select [ImageKind::Jpeg], everything else
    /// is [ImageKind::Other]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageKind::Jpeg),
            _ => Ok(ImageKind::Other),
        }
    }
}

#[derive(Clone)]
pub enum ImageData {
    /// The original file contents of an RGB JPEG, written out as-is
    DirectlyEmbeddableJpeg(Vec<u8>),
    Raster(DynamicImage),
}

/// A decoded image, ready to be placed on a page. `width` and `height` are the
/// pixel dimensions, which layout treats as points at 100% scale.
#[derive(Clone)]
pub struct Image {
    pub data: ImageData,
    pub width: f32,
    pub height: f32,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.data {
            ImageData::DirectlyEmbeddableJpeg(_) => "jpeg",
            ImageData::Raster(_) => "raster",
        };
        f.debug_struct("Image")
            .field("kind", &kind)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

struct EncodeOutput<'a> {
    filter: Filter,
    bytes: std::borrow::Cow<'a, [u8]>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Read and decode an image file
    pub fn from_disk<P: AsRef<Path>>(path: P, kind: ImageKind) -> Result<Image, PDFError> {
        let data = std::fs::read(path.as_ref())?;
        match kind {
            ImageKind::Jpeg => Self::from_jpeg_bytes(data),
            ImageKind::Other => {
                let image = image::load_from_memory(&data)?;
                Ok(Self::new_raster(image))
            }
        }
    }

    /// Decode a JPEG held in memory. RGB JPEGs keep their original bytes so
    /// they can be embedded with the DCT filter.
    pub fn from_jpeg_bytes(data: Vec<u8>) -> Result<Image, PDFError> {
        let image = image::load_from_memory_with_format(&data, ImageFormat::Jpeg)?;
        if image.color() == ColorType::Rgb8 {
            let width = image.width() as f32;
            let height = image.height() as f32;
            Ok(Image {
                data: ImageData::DirectlyEmbeddableJpeg(data),
                width,
                height,
            })
        } else {
            Ok(Self::new_raster(image))
        }
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            data: ImageData::Raster(image),
            width,
            height,
        }
    }

    fn encode(&self) -> EncodeOutput<'_> {
        match &self.data {
            ImageData::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.as_slice().into(),
                mask: None,
            },
            ImageData::Raster(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes: bytes.into(),
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, &encoded.bytes);
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
