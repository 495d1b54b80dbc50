use std::f64::consts::PI;
use versor::{Quat, Vec3};

fn main() {
    // Two rotations about different axes; order matters
    let yaw = Quat::from_vector_angle(Vec3::z(), PI / 4.0);
    let pitch = Quat::from_vector_angle(Vec3::y(), PI / 6.0);

    println!("=== Composition ===");
    println!("yaw          {yaw}");
    println!("pitch        {pitch}");
    println!("yaw * pitch  {}", yaw * pitch);
    println!("pitch * yaw  {}", pitch * yaw);

    // Long products drift off unit norm; renormalize to recover
    let step = Quat::from_vector_angle(Vec3::z(), PI / 1000.0);
    let mut q = Quat::identity();
    for _ in 0..2000 {
        q = q * step;
    }
    println!("\n=== Drift over 2000 steps ===");
    println!("norm          {:.17}", q.norm());
    let q = q.normalize().expect("accumulated rotation is nonzero");
    println!("renormalized  {:.17}", q.norm());

    println!("\n=== Export ===");
    println!("conjugate     {}", q.conjugate());
    println!("as [w,x,y,z]  {:?}", q.as_array());
}
