//! Foggy spheres demo.
//!
//! Renders glass, metal, and diffuse spheres under a spherical light,
//! with a smoke volume wrapped around one of them, and saves a PNG.

use haze_render::{
    render, Camera, Color, ConstantMedium, Dielectric, DiffuseLight, Hittable, HittableList,
    Lambertian, Material, Metal, RenderConfig, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let world = build_scene();

    let mut camera = Camera::new()
        .with_resolution(400, 225)
        .with_position(
            Vec3::new(8.0, 2.5, 8.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_lens(30.0, 0.0, 10.0);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 200,
        max_depth: 20,
        background: Color::new(0.02, 0.02, 0.04),
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let image = render(&camera, &world, &config, &mut rng);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "foggy_spheres.png";
    image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .expect("buffer size matches dimensions")
        .save(filename)
        .expect("failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> HittableList {
    let mut world = HittableList::new();

    // Ground
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.48, 0.53, 0.53)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    // Overhead light
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::new(7.0, 7.0, 7.0)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 8.0, 0.0), 2.0, light)));

    // Glass
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    world.add(Box::new(Sphere::new(Vec3::new(-2.2, 1.0, 0.0), 1.0, glass)));

    // Brushed metal
    let metal: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.85, 0.88), 0.05));
    world.add(Box::new(Sphere::new(Vec3::new(2.2, 1.0, 0.0), 1.0, metal)));

    // Diffuse sphere wrapped in smoke
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, red)));

    let smoke_boundary: Arc<dyn Hittable> = Arc::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.8,
        Arc::new(Dielectric::new(1.5)),
    ));
    let smoke = ConstantMedium::from_color(smoke_boundary, 0.6, Color::new(0.9, 0.9, 0.9))
        .expect("positive density");
    world.add(Box::new(smoke));

    world
}
