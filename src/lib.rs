//! Compact 2D/3D/4D math for graphics applications: vectors,
//! quaternions, column-major matrices, transform builders, vertex
//! attribute bit-packing and a 14-DOP bounding volume.

#[macro_use]
mod macros;

pub mod dop;
pub mod matrix;
pub mod num;
pub mod packing;
pub mod quaternion;
pub mod scalar;
pub mod transform;
pub mod vector;

pub use dop::Dop;
pub use matrix::{DMat3, DMat4, Mat3, Mat4, Matrix3, Matrix4};
pub use quaternion::{DQuat, Quat, Quaternion};
pub use vector::{
    DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UByte4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4,
    Vector2, Vector3, Vector4,
};
