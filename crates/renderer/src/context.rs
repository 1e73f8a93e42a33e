//! Headless wgpu device creation.

/// Adapter, device and queue without a presentation surface.
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Request any adapter able to create buffers. No surface is involved, so
    /// this works on machines without a window system.
    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find a GPU adapter"))?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Mesh Upload Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        Ok(Self { adapter, device, queue })
    }

    /// Blocking wrapper around [`GpuContext::headless`].
    pub fn headless_blocking() -> anyhow::Result<Self> {
        pollster::block_on(Self::headless())
    }

    pub fn adapter_name(&self) -> String {
        self.adapter.get_info().name
    }
}
