//! meshgen: builds the configured grid and rounded box, checks the box colliders
//! in a physics drop test, and exports the meshes as OBJ.

mod config;
mod export;
mod links;

use anyhow::{Context, Result};
use config::MeshgenConfig;
use glam::Vec3;
use mesh_core::{MeshData, MeshVertex};
use physics::{PhysicsWorld, RayTarget};
use procgen::{generate_grid, generate_rounded_box, RoundedBoxMesh};
use renderer::{GpuContext, GpuMesh, VertexLayout};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);
    let config = MeshgenConfig::load(&config_path);

    run(&config)
}

fn run(config: &MeshgenConfig) -> Result<()> {
    let grid = generate_grid(config.grid)
        .with_context(|| format!("generating grid {:?}", config.grid))?;
    log_mesh_stats(&grid);

    let rounded_box = generate_rounded_box(config.rounded_box)
        .with_context(|| format!("generating rounded box {:?}", config.rounded_box))?;
    log_mesh_stats(&rounded_box.mesh);

    let (min, max) = rounded_box.colliders.bounds();
    log::info!("Collider envelope: {} .. {}", min, max);

    if config.settle_steps > 0 {
        drop_test(&rounded_box, config.settle_steps);
    }

    if let Some(dir) = &config.output_dir {
        export_all(dir, &grid, &rounded_box)?;
    }

    if let Some(path) = &config.links_file {
        let entries = links::load_links(path)
            .with_context(|| format!("loading links from {}", path.display()))?;
        log::info!("{} links in {}", entries.len(), path.display());
        for entry in &entries {
            log::info!("  {} -> {}", entry.label, entry.url);
        }
    }

    if config.upload_to_gpu {
        let gpu = GpuContext::headless_blocking().context("creating headless GPU device")?;
        upload(&gpu, &grid);
        upload(&gpu, &rounded_box.mesh);
    }

    Ok(())
}

fn log_mesh_stats<V: MeshVertex>(mesh: &MeshData<V>) {
    log::info!(
        "{}: {} vertices, {} triangles",
        mesh.name,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    for submesh in mesh.submeshes() {
        log::info!("  {}: {} triangles", submesh.name, submesh.triangle_count());
    }
}

/// Drop the box onto a ground plane and report where it comes to rest.
fn drop_test(rounded_box: &RoundedBoxMesh, steps: u32) {
    let mut world = PhysicsWorld::new();
    world.add_ground_plane();

    let (min, max) = rounded_box.colliders.bounds();
    let body = world.add_dynamic_body(Vec3::new(0.0, max.y, 0.0));
    let handles = world.attach_rounded_box_colliders(body, &rounded_box.colliders);

    for _ in 0..steps {
        world.step();
    }

    let Some(rest) = world.body_position(body) else {
        log::warn!("Drop test body vanished");
        return;
    };
    world.update_query_pipeline();
    let center = rest + (max - min) * 0.5;
    let top = world.surface_height(center.x, center.z, center.y + max.y, RayTarget::Body(body));
    log::info!(
        "Drop test: {} colliders, rest position {} after {} steps, top at {:?}",
        handles.len(),
        rest,
        steps,
        top
    );
}

fn export_all(dir: &Path, grid: &MeshData<mesh_core::GridVertex>, rounded_box: &RoundedBoxMesh) -> Result<()> {
    let grid_path = dir.join("grid.obj");
    export::write_obj(&grid_path, grid)?;
    log::info!("Wrote {}", grid_path.display());

    let box_path = dir.join("rounded_box.obj");
    export::write_obj(&box_path, &rounded_box.mesh)?;
    log::info!("Wrote {}", box_path.display());
    Ok(())
}

fn upload<V: VertexLayout>(gpu: &GpuContext, mesh: &MeshData<V>) {
    let gpu_mesh = GpuMesh::upload(&gpu.device, mesh);
    log::info!(
        "Uploaded {} to {}: {} bytes of vertices, {} index buffers",
        mesh.name,
        gpu.adapter_name(),
        gpu_mesh.vertex_buffer.size(),
        gpu_mesh.submeshes.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgen::{GridParams, RoundedBoxParams};

    #[test]
    fn run_exports_both_meshes() {
        let dir = std::env::temp_dir().join(format!("meshgen-run-{}", std::process::id()));
        let config = MeshgenConfig {
            grid: GridParams::new(2, 1),
            rounded_box: RoundedBoxParams::new(2, 2, 2, 1),
            output_dir: Some(dir.clone()),
            settle_steps: 10,
            ..Default::default()
        };

        run(&config).unwrap();
        assert!(dir.join("grid.obj").exists());
        assert!(dir.join("rounded_box.obj").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn run_rejects_invalid_box() {
        let config = MeshgenConfig {
            rounded_box: RoundedBoxParams::new(2, 2, 2, 2),
            settle_steps: 0,
            ..Default::default()
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("rounded box"));
    }
}
