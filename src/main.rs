use lorviz::prelude::*;

fn main() -> Result<(), VizError> {
    // Five seeds scattered around the attractor basin, one color each.
    Viewer::new()
        .with_title("lorviz - Lorenz Attractor")
        .with_curve(Vec3::new(2.0, 4.0, 7.0), Vec3::new(1.0, 1.0, 0.0))
        .with_curve(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.5, 0.0))
        .with_curve(Vec3::new(1.0, 3.0, 4.0), Vec3::new(0.0, 0.5, 0.5))
        .with_curve(Vec3::new(6.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0))
        .with_curve(Vec3::new(4.0, 3.0, 1.0), Vec3::new(0.0, 0.0, 1.0))
        .run()
}
