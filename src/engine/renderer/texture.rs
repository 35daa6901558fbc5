// GPU textures for sprite sheets

use anyhow::{bail, Result};
use image::RgbaImage;

use crate::engine::assets::SpriteSheet;

/// Handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

/// A loaded texture with GPU resources
pub struct Texture {
    /// Only read through `view`, owned here so the GPU memory outlives it
    _texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Upload an RGBA image
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &RgbaImage,
        label: Option<&str>,
    ) -> Result<Self> {
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            bail!("Cannot upload an empty {}x{} texture", width, height);
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest filtering keeps neighbouring frames from bleeding into the crop
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Ok(Self {
            _texture: texture,
            view,
            sampler,
        })
    }

    /// Create a 1x1 solid color texture
    pub fn from_color(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color: [u8; 4],
        label: Option<&str>,
    ) -> Result<Self> {
        let pixel = RgbaImage::from_pixel(1, 1, image::Rgba(color));
        Self::from_rgba(device, queue, &pixel, label)
    }
}

/// Owns every texture uploaded to the GPU
pub struct TextureManager {
    textures: Vec<Texture>,
}

impl TextureManager {
    /// Create a texture manager holding a white fallback texture
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Result<Self> {
        let white = Texture::from_color(device, queue, [255, 255, 255, 255], Some("White"))?;
        Ok(Self {
            textures: vec![white],
        })
    }

    /// Texture used by sprites without one of their own
    pub fn white(&self) -> TextureHandle {
        TextureHandle(0)
    }

    /// Upload a sprite sheet
    pub fn load_sheet(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        sheet: &SpriteSheet,
    ) -> Result<TextureHandle> {
        let texture = Texture::from_rgba(device, queue, sheet.pixels(), Some(sheet.label()))?;
        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        Ok(handle)
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0)
    }

    /// Get the number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}
