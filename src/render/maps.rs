//! The three material maps, their sampler and the bind group that ties them
//! to the uniform buffer.

use super::helpers;
use crate::constants::{MAX_ANISOTROPY, PLACEHOLDER_TEXEL};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapSlot {
    Color,
    Bump,
    Displacement,
}

impl MapSlot {
    pub const ALL: [MapSlot; 3] = [MapSlot::Color, MapSlot::Bump, MapSlot::Displacement];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            MapSlot::Color => 0,
            MapSlot::Bump => 1,
            MapSlot::Displacement => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapSlot::Color => "color_map",
            MapSlot::Bump => "bump_map",
            MapSlot::Displacement => "displacement_map",
        }
    }

    /// Colour is authored in sRGB; height maps are read as linear data.
    fn format(self) -> wgpu::TextureFormat {
        match self {
            MapSlot::Color => wgpu::TextureFormat::Rgba8UnormSrgb,
            MapSlot::Bump | MapSlot::Displacement => wgpu::TextureFormat::Rgba8Unorm,
        }
    }
}

pub(crate) struct MaterialMaps {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: [(wgpu::Texture, wgpu::TextureView); 3],
    loaded: [bool; 3],
    pub(crate) bind_group: wgpu::BindGroup,
}

impl MaterialMaps {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniform_buffer: &wgpu::Buffer,
    ) -> Self {
        let texture_entry = |binding: u32, visibility: wgpu::ShaderStages| {
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            }
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sphere_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                texture_entry(2, wgpu::ShaderStages::FRAGMENT),
                texture_entry(3, wgpu::ShaderStages::FRAGMENT),
                texture_entry(4, wgpu::ShaderStages::VERTEX),
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("map_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            anisotropy_clamp: MAX_ANISOTROPY,
            ..Default::default()
        });
        let textures = MapSlot::ALL.map(|slot| {
            helpers::create_solid_texture(
                device,
                queue,
                slot.label(),
                slot.format(),
                PLACEHOLDER_TEXEL,
            )
        });
        let bind_group = build_bind_group(device, &layout, uniform_buffer, &sampler, &textures);
        Self {
            layout,
            sampler,
            textures,
            loaded: [false; 3],
            bind_group,
        }
    }

    pub(crate) fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub(crate) fn loaded(&self) -> [bool; 3] {
        self.loaded
    }

    /// Copy a decoded image into `slot` and rebind.
    pub(crate) fn upload_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniform_buffer: &wgpu::Buffer,
        slot: MapSlot,
        image: &web::HtmlImageElement,
    ) {
        let width = image.natural_width();
        let height = image.natural_height();
        if width == 0 || height == 0 {
            log::warn!("[maps] {} image has no size; keeping placeholder", slot.label());
            return;
        }
        let (texture, view) =
            helpers::create_image_texture(device, slot.label(), width, height, slot.format());
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.textures[slot.index()] = (texture, view);
        self.loaded[slot.index()] = true;
        self.bind_group = build_bind_group(
            device,
            &self.layout,
            uniform_buffer,
            &self.sampler,
            &self.textures,
        );
        log::info!("[maps] {} ready ({}x{})", slot.label(), width, height);
    }
}

fn build_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    sampler: &wgpu::Sampler,
    textures: &[(wgpu::Texture, wgpu::TextureView); 3],
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sphere_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&textures[0].1),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::TextureView(&textures[1].1),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::TextureView(&textures[2].1),
            },
        ],
    })
}
