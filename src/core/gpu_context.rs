use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Features, Instance, Limits, Queue};

use crate::error::{Result, ViewerError};

/// Shared wgpu device and queue
///
/// Cloning is cheap (Arc). No surface is involved: the viewer only needs a
/// queue to stage uniform writes.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a headless context on the default adapter
    pub async fn new() -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = Self::request_adapter(&instance).await?;
        log::info!("Using GPU adapter: {}", adapter.get_info().name);
        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    async fn request_adapter(instance: &Instance) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| {
                ViewerError::BackendUnavailable(format!("no suitable adapter: {:?}", e))
            })
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Uniform Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| {
                ViewerError::BackendUnavailable(format!("failed to create device: {:?}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_semantics() {
        // Creating a real context needs hardware; check the handle shape only
        fn assert_clone<T: Clone>() {}
        assert_clone::<GpuContext>();
        assert!(std::mem::size_of::<GpuContext>() > 0);
    }
}
