//! Bit-packing codecs for compact vertex attribute formats.
//!
//! Unorm codecs clamp to `[0, 1]`, snorm codecs to `[-1, 1]`; every pack
//! rounds to the nearest representable value.

use crate::vector::{UByte4, Vec2, Vec3, Vec4};

/// Packs a unorm vector into four 8-bit lanes, `x` in bits 31..24 and
/// `w` in bits 7..0.
pub fn pack_unorm_8_8_8_8(vo: Vec4) -> u32 {
    let v = (vo.clamp(Vec4::ZERO, Vec4::UNIT_XYZW) * 255.0).round();
    ((v.x as u32) << 24) | ((v.y as u32) << 16) | ((v.z as u32) << 8) | (v.w as u32)
}

/// Inverse of [`pack_unorm_8_8_8_8`].
pub fn unpack_unorm_8_8_8_8(val: u32) -> Vec4 {
    Vec4::new(
        ((val >> 24) & 0xFF) as f32 / 255.0,
        ((val >> 16) & 0xFF) as f32 / 255.0,
        ((val >> 8) & 0xFF) as f32 / 255.0,
        (val & 0xFF) as f32 / 255.0,
    )
}

/// Unpacks the three low 8-bit lanes as unorm values, `x` from bits
/// 23..16. Bits 31..24 are ignored.
pub fn unpack_unorm_8_8_8(val: u32) -> Vec3 {
    Vec3::new(
        ((val >> 16) & 0xFF) as f32 / 255.0,
        ((val >> 8) & 0xFF) as f32 / 255.0,
        (val & 0xFF) as f32 / 255.0,
    )
}

/// Packs four bytes into a `u32`, `x` in bits 31..24 and `w` in bits
/// 7..0. No scaling is applied.
pub fn pack_into_8_8_8_8(v: UByte4) -> u32 {
    (u32::from(v.x) << 24) | (u32::from(v.y) << 16) | (u32::from(v.z) << 8) | u32::from(v.w)
}

/// Inverse of [`pack_into_8_8_8_8`].
pub fn unpack_8_8_8_8_into_ubyte4(val: u32) -> UByte4 {
    UByte4::new(
        ((val >> 24) & 0xFF) as u8,
        ((val >> 16) & 0xFF) as u8,
        ((val >> 8) & 0xFF) as u8,
        (val & 0xFF) as u8,
    )
}

/// Packs a snorm vector into two's-complement lanes: `x` in bits 9..0,
/// `y` in 19..10, `z` in 29..20 and `w` in 31..30. The `xyz` components
/// are scaled by 511; `w` is stored unscaled, so only -1, 0 and 1
/// survive the trip.
pub fn pack_snorm_10_10_10_2(vo: Vec4) -> u32 {
    let v = (Vec4::new(511.0, 511.0, 511.0, 1.0)
        * vo.clamp(-Vec4::UNIT_XYZW, Vec4::UNIT_XYZW))
    .round();

    let x = (v.x as i32) as u32 & 0x3FF;
    let y = (v.y as i32) as u32 & 0x3FF;
    let z = (v.z as i32) as u32 & 0x3FF;
    let w = (v.w as i32) as u32 & 0x3;
    (w << 30) | (z << 20) | (y << 10) | x
}

/// Inverse of [`pack_snorm_10_10_10_2`].
pub fn unpack_snorm_10_10_10_2(p: u32) -> Vec4 {
    // Shift each lane to the top and back down to sign-extend it.
    let x = ((p << 22) as i32) >> 22;
    let y = (((p >> 10) << 22) as i32) >> 22;
    let z = (((p >> 20) << 22) as i32) >> 22;
    let w = (p as i32) >> 30;

    Vec4::new(
        x as f32 / 511.0,
        y as f32 / 511.0,
        z as f32 / 511.0,
        w as f32,
    )
}

/// Packs a unorm vector into unsigned lanes: `x` in bits 9..0, `y` in
/// 19..10, `z` in 29..20 and `w` in 31..30. The `xyz` components are
/// scaled by 1023 and `w` by 3.
pub fn pack_unorm_10_10_10_2(vo: Vec4) -> u32 {
    let v = (Vec4::new(1023.0, 1023.0, 1023.0, 3.0) * vo.clamp(Vec4::ZERO, Vec4::UNIT_XYZW))
        .round();

    ((v.w as u32) << 30) | ((v.z as u32) << 20) | ((v.y as u32) << 10) | (v.x as u32)
}

/// Inverse of [`pack_unorm_10_10_10_2`].
pub fn unpack_unorm_10_10_10_2(p: u32) -> Vec4 {
    Vec4::new(
        (p & 0x3FF) as f32 / 1023.0,
        ((p >> 10) & 0x3FF) as f32 / 1023.0,
        ((p >> 20) & 0x3FF) as f32 / 1023.0,
        (p >> 30) as f32 / 3.0,
    )
}

/// Packs a unorm vector into unsigned lanes: `w` in bits 1..0, `x` in
/// 11..2, `y` in 21..12 and `z` in 31..22. The `xyz` components are
/// scaled by 1023 and `w` by 3.
pub fn pack_unorm_2_10_10_10(vo: Vec4) -> u32 {
    let v = (Vec4::new(1023.0, 1023.0, 1023.0, 3.0) * vo.clamp(Vec4::ZERO, Vec4::UNIT_XYZW))
        .round();

    ((v.z as u32) << 22) | ((v.y as u32) << 12) | ((v.x as u32) << 2) | (v.w as u32)
}

/// Inverse of [`pack_unorm_2_10_10_10`].
pub fn unpack_unorm_2_10_10_10(p: u32) -> Vec4 {
    Vec4::new(
        ((p >> 2) & 0x3FF) as f32 / 1023.0,
        ((p >> 12) & 0x3FF) as f32 / 1023.0,
        ((p >> 22) & 0x3FF) as f32 / 1023.0,
        (p & 0x3) as f32 / 3.0,
    )
}

/// Packs a unorm vector with the component lanes reversed: `w` in bits
/// 1..0, `z` in 11..2, `y` in 21..12 and `x` in 31..22. The `xyz`
/// components are scaled by 1023 and `w` by 3.
pub fn pack_unorm_2_10_10_10_rev(vo: Vec4) -> u32 {
    let v = (Vec4::new(1023.0, 1023.0, 1023.0, 3.0) * vo.clamp(Vec4::ZERO, Vec4::UNIT_XYZW))
        .round();

    ((v.x as u32) << 22) | ((v.y as u32) << 12) | ((v.z as u32) << 2) | (v.w as u32)
}

/// Inverse of [`pack_unorm_2_10_10_10_rev`].
pub fn unpack_unorm_2_10_10_10_rev(p: u32) -> Vec4 {
    Vec4::new(
        ((p >> 22) & 0x3FF) as f32 / 1023.0,
        ((p >> 12) & 0x3FF) as f32 / 1023.0,
        ((p >> 2) & 0x3FF) as f32 / 1023.0,
        (p & 0x3) as f32 / 3.0,
    )
}

/// Packs a unorm vector into two 16-bit lanes scaled by 65535, `x` in
/// bits 31..16 and `y` in bits 15..0.
pub fn pack_unorm_16_16(vo: Vec2) -> u32 {
    let v = (vo.clamp(Vec2::ZERO, Vec2::UNIT_XY) * 65535.0).round();
    ((v.x as u32) << 16) | (v.y as u32)
}

/// Inverse of [`pack_unorm_16_16`].
pub fn unpack_unorm_16_16(p: u32) -> Vec2 {
    Vec2::new(
        ((p >> 16) & 0xFFFF) as f32 / 65535.0,
        (p & 0xFFFF) as f32 / 65535.0,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bytes_pack_into_known_lanes_and_back() {
        let cases = [
            (UByte4::ZERO, 0x00_00_00_00),
            (UByte4::new(0xFF, 0x00, 0x00, 0x00), 0xFF_00_00_00),
            (UByte4::new(0x00, 0xFF, 0x00, 0x00), 0x00_FF_00_00),
            (UByte4::new(0x00, 0x00, 0xFF, 0x00), 0x00_00_FF_00),
            (UByte4::new(0x00, 0x00, 0x00, 0xFF), 0x00_00_00_FF),
            (UByte4::new(0xFF, 0xFF, 0xFF, 0xFF), 0xFF_FF_FF_FF),
            (UByte4::new(0xA1, 0xB2, 0xE3, 0xF4), 0xA1_B2_E3_F4),
        ];

        for (unpacked, packed) in cases {
            assert_eq!(pack_into_8_8_8_8(unpacked), packed);
            assert_eq!(unpack_8_8_8_8_into_ubyte4(packed), unpacked);
        }
    }

    #[test]
    fn unorm_8_8_8_8_packs_into_known_lanes_and_back() {
        let cases = [
            (Vec4::ZERO, 0x00_00_00_00),
            (Vec4::UNIT_X, 0xFF_00_00_00),
            (Vec4::UNIT_Y, 0x00_FF_00_00),
            (Vec4::UNIT_Z, 0x00_00_FF_00),
            (Vec4::UNIT_W, 0x00_00_00_FF),
            (Vec4::UNIT_XYZW, 0xFF_FF_FF_FF),
            (
                Vec4::new(
                    0xA1 as f32 / 255.0,
                    0xB2 as f32 / 255.0,
                    0xE3 as f32 / 255.0,
                    0x18 as f32 / 255.0,
                ),
                0xA1_B2_E3_18,
            ),
        ];

        for (unpacked, packed) in cases {
            assert_eq!(pack_unorm_8_8_8_8(unpacked), packed);
            assert_eq!(unpack_unorm_8_8_8_8(packed), unpacked);
        }
    }

    #[test]
    fn unorm_8_8_8_8_clamps_out_of_range_components() {
        assert_eq!(
            pack_unorm_8_8_8_8(Vec4::new(-10.0, 10.0, 0.0, 10.0)),
            0x00_FF_00_FF
        );
    }

    #[test]
    fn unorm_8_8_8_unpacks_the_low_three_lanes() {
        assert_eq!(unpack_unorm_8_8_8(0), Vec3::ZERO);
        assert_eq!(unpack_unorm_8_8_8(0x00_FF_00_00), Vec3::UNIT_X);
        assert_eq!(unpack_unorm_8_8_8(0x00_00_FF_00), Vec3::UNIT_Y);
        assert_eq!(unpack_unorm_8_8_8(0x00_00_00_FF), Vec3::UNIT_Z);
        assert_eq!(unpack_unorm_8_8_8(0x00_FF_FF_FF), Vec3::UNIT_XYZ);
        // The high byte is ignored.
        assert_eq!(unpack_unorm_8_8_8(0xFF_FF_FF_FF), Vec3::UNIT_XYZ);
        assert_eq!(
            unpack_unorm_8_8_8(0x00_A1_B2_E3),
            Vec3::new(
                0xA1 as f32 / 255.0,
                0xB2 as f32 / 255.0,
                0xE3 as f32 / 255.0
            )
        );
    }

    #[test]
    fn snorm_10_10_10_2_round_trips_within_quantization_error() {
        let vectors = [
            Vec4::ZERO,
            -Vec4::UNIT_XYZW,
            Vec4::UNIT_XYZW,
            Vec4::new(-0.7, 0.0, 0.4, 1.0),
        ];

        for v in vectors {
            let unpacked = unpack_snorm_10_10_10_2(pack_snorm_10_10_10_2(v));
            assert!(v.approx_equal(unpacked, 0.01), "{v:?} -> {unpacked:?}");
        }
    }

    #[test]
    fn snorm_10_10_10_2_clamps_out_of_range_components() {
        let v = Vec4::new(-10.0, 10.0, 0.0, 10.0);
        let expected = v.clamp(-Vec4::UNIT_XYZW, Vec4::UNIT_XYZW);
        let unpacked = unpack_snorm_10_10_10_2(pack_snorm_10_10_10_2(v));
        assert!(expected.approx_equal(unpacked, 0.01));
    }

    #[test]
    fn snorm_lane_layout_starts_with_x_at_the_least_significant_bits() {
        assert_eq!(pack_snorm_10_10_10_2(Vec4::new(1.0, 0.0, 0.0, 0.0)), 0x1FF);
        assert_eq!(
            pack_snorm_10_10_10_2(Vec4::new(0.0, 1.0, 0.0, 0.0)),
            0x1FF << 10
        );
        assert_eq!(
            pack_snorm_10_10_10_2(Vec4::new(-1.0, 0.0, 0.0, 0.0)),
            // -511 in 10-bit two's complement.
            0x201
        );
        assert_eq!(
            pack_snorm_10_10_10_2(Vec4::new(0.0, 0.0, 0.0, 1.0)),
            0x1 << 30
        );
    }

    #[test]
    fn unorm_10_10_10_2_round_trips_within_quantization_error() {
        let vectors = [Vec4::ZERO, Vec4::UNIT_XYZW, Vec4::new(0.7, 0.0, 0.4, 1.0)];

        for v in vectors {
            let unpacked = unpack_unorm_10_10_10_2(pack_unorm_10_10_10_2(v));
            assert!(v.approx_equal(unpacked, 0.01), "{v:?} -> {unpacked:?}");
        }
    }

    #[test]
    fn unorm_10_10_10_2_clamps_out_of_range_components() {
        let v = Vec4::new(-10.0, 10.0, 0.0, 10.0);
        let expected = v.clamp(Vec4::ZERO, Vec4::UNIT_XYZW);
        let unpacked = unpack_unorm_10_10_10_2(pack_unorm_10_10_10_2(v));
        assert!(expected.approx_equal(unpacked, 0.01));
    }

    #[test]
    fn unorm_10_10_10_2_lane_layout_starts_with_x_at_the_least_significant_bits() {
        assert_eq!(pack_unorm_10_10_10_2(Vec4::new(1.0, 0.0, 0.0, 0.0)), 0x3FF);
        assert_eq!(
            pack_unorm_10_10_10_2(Vec4::new(0.0, 0.0, 1.0, 0.0)),
            0x3FF << 20
        );
        assert_eq!(
            pack_unorm_10_10_10_2(Vec4::new(0.0, 0.0, 0.0, 1.0)),
            0x3 << 30
        );
    }

    #[test]
    fn unorm_2_10_10_10_puts_w_in_the_low_two_bits() {
        assert_eq!(pack_unorm_2_10_10_10(Vec4::new(1.0, 0.0, 0.0, 0.0)), 0x3FF << 2);
        assert_eq!(
            pack_unorm_2_10_10_10(Vec4::new(0.0, 1.0, 0.0, 0.0)),
            0x3FF << 12
        );
        assert_eq!(
            pack_unorm_2_10_10_10(Vec4::new(0.0, 0.0, 1.0, 0.0)),
            0x3FF << 22
        );
        assert_eq!(pack_unorm_2_10_10_10(Vec4::new(0.0, 0.0, 0.0, 1.0)), 0x3);
        assert_eq!(pack_unorm_2_10_10_10(Vec4::UNIT_XYZW), 0xFF_FF_FF_FF);
    }

    #[test]
    fn unorm_2_10_10_10_rev_reverses_the_component_lanes() {
        assert_eq!(
            pack_unorm_2_10_10_10_rev(Vec4::new(1.0, 0.0, 0.0, 0.0)),
            0x3FF << 22
        );
        assert_eq!(
            pack_unorm_2_10_10_10_rev(Vec4::new(0.0, 1.0, 0.0, 0.0)),
            0x3FF << 12
        );
        assert_eq!(
            pack_unorm_2_10_10_10_rev(Vec4::new(0.0, 0.0, 1.0, 0.0)),
            0x3FF << 2
        );
        assert_eq!(pack_unorm_2_10_10_10_rev(Vec4::new(0.0, 0.0, 0.0, 1.0)), 0x3);
    }

    #[test]
    fn unorm_2_10_10_10_round_trips_within_quantization_error() {
        let vectors = [Vec4::ZERO, Vec4::UNIT_XYZW, Vec4::new(0.7, 0.0, 0.4, 1.0)];

        for v in vectors {
            let unpacked = unpack_unorm_2_10_10_10(pack_unorm_2_10_10_10(v));
            assert!(v.approx_equal(unpacked, 0.01), "{v:?} -> {unpacked:?}");

            let unpacked = unpack_unorm_2_10_10_10_rev(pack_unorm_2_10_10_10_rev(v));
            assert!(v.approx_equal(unpacked, 0.01), "{v:?} -> {unpacked:?}");
        }
    }

    #[test]
    fn unorm_2_10_10_10_clamps_out_of_range_components() {
        let v = Vec4::new(-10.0, 10.0, 0.0, 10.0);
        let expected = v.clamp(Vec4::ZERO, Vec4::UNIT_XYZW);
        let unpacked = unpack_unorm_2_10_10_10(pack_unorm_2_10_10_10(v));
        assert!(expected.approx_equal(unpacked, 0.01));
    }

    #[test]
    fn unorm_16_16_packs_x_into_the_high_lane() {
        assert_eq!(pack_unorm_16_16(Vec2::ZERO), 0);
        assert_eq!(pack_unorm_16_16(Vec2::new(1.0, 0.0)), 0xFFFF_0000);
        assert_eq!(pack_unorm_16_16(Vec2::new(0.0, 1.0)), 0x0000_FFFF);
        assert_eq!(pack_unorm_16_16(Vec2::UNIT_XY), 0xFFFF_FFFF);
    }

    #[test]
    fn unorm_16_16_round_trips_within_quantization_error() {
        let vectors = [
            Vec2::ZERO,
            Vec2::UNIT_XY,
            Vec2::new(0.25, 0.75),
            Vec2::new(0.001, 0.999),
        ];

        for v in vectors {
            let unpacked = unpack_unorm_16_16(pack_unorm_16_16(v));
            assert!(v.approx_equal(unpacked, 1e-4), "{v:?} -> {unpacked:?}");
        }
    }

    #[test]
    fn unorm_16_16_clamps_out_of_range_components() {
        assert_eq!(pack_unorm_16_16(Vec2::new(-3.0, 42.0)), 0x0000_FFFF);
    }
}
