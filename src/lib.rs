//! versor — Quaternion algebra for 3D orientation work
//!
//! Value-type quaternions generic over the scalar, plus the small vector
//! toolkit the algebra needs. Works in no_std builds (enable `libm` for
//! the math functions) and in ordinary f32/f64 code alike.
//!
//! # Design principles
//! - Generic over `Scalar` type (f32, f64)
//! - `#[repr(C)]` everywhere for GPU interop
//! - Immutable values: every operation returns a new quaternion
//! - One fallible operation, `normalize`, which rejects an exactly zero norm

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod error;
mod quat;
mod scalar;
mod vec3;

pub use error::VersorError;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec3::Vec3;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_axis_rotations_compose_by_angle_sum() {
        let axis = Vec3::y();
        let a = Quat::from_vector_angle(axis, 0.3);
        let b = Quat::from_vector_angle(axis, 0.5);
        let composed = a * b;
        let direct = Quat::from_vector_angle(axis, 0.8);
        assert!((composed - direct).norm() < 1e-12);
    }

    #[test]
    fn conjugate_inverts_unit_quaternions() {
        let axis = Vec3::new(2.0, -1.0, 0.5).normalize();
        let q = Quat::from_vector_angle(axis, 1.1);
        let p = q * q.conjugate();
        assert!((p - Quat::identity()).norm() < 1e-12);
    }

    #[test]
    fn renormalize_after_drift() {
        let axis = Vec3::x();
        let mut q = Quat::from_vector_angle(axis, 0.25);
        for _ in 0..100 {
            q = q * Quat::from_vector_angle(axis, 0.25);
        }
        let n = q.normalize().unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }
}
