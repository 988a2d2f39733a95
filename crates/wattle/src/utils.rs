//! Colour and math helpers implemented by the native library, plus its storage slots.
//!
//! The `*_to_float` calls hand back a buffer that the library owns and reuses on the next call of
//! the same function. They take `&mut self` so the returned [`NativeArray`] keeps every other call
//! out until it is dropped.
use crate::Raylib;
use crate::color::Color;
use crate::marshal::{NativeArray, NativeLayout};
use crate::math::{Matrix, Vector3};

impl Raylib {
    /// Returns a colour from a hexadecimal value (`0xRRGGBBAA`).
    pub fn get_color(&self, hex_value: i32) -> Color {
        Color::from_native(unsafe { (self.api.get_color)(hex_value) })
    }

    /// Returns the hexadecimal value (`0xRRGGBBAA`) of a colour.
    pub fn get_hex_value(&self, color: Color) -> i32 {
        unsafe { (self.api.get_hex_value)(color.into_native()) }
    }

    /// Converts a colour to normalized floats, in the library's RGBA buffer.
    pub fn color_to_float(&mut self, color: Color) -> Option<NativeArray<'_, f32, 4>> {
        let ptr = unsafe { (self.api.color_to_float)(color.into_native()) };
        unsafe { NativeArray::from_raw(ptr) }
    }

    /// Converts a vector to its three floats, in the library's buffer.
    pub fn vector_to_float(&mut self, vector: Vector3) -> Option<NativeArray<'_, f32, 3>> {
        let ptr = unsafe { (self.api.vector_to_float)(vector.into_native()) };
        unsafe { NativeArray::from_raw(ptr) }
    }

    /// Converts a matrix to its sixteen floats in `m0..m15` order, in the library's buffer.
    pub fn matrix_to_float(&mut self, matrix: Matrix) -> Option<NativeArray<'_, f32, 16>> {
        let ptr = unsafe { (self.api.matrix_to_float)(matrix.into_native()) };
        unsafe { NativeArray::from_raw(ptr) }
    }

    /// Returns a random value between `min` and `max`, both included.
    pub fn get_random_value(&self, min: i32, max: i32) -> i32 {
        unsafe { (self.api.get_random_value)(min, max) }
    }

    /// Returns `color` with its alpha replaced, `alpha` going from 0.0 to 1.0.
    pub fn fade(&self, color: Color, alpha: f32) -> Color {
        Color::from_native(unsafe { (self.api.fade)(color.into_native(), alpha) })
    }

    /// Saves an integer into the library's storage file at slot `position`.
    pub fn storage_save_value(&self, position: i32, value: i32) {
        unsafe { (self.api.storage_save_value)(position, value) }
    }

    /// Loads the integer stored at slot `position`.
    pub fn storage_load_value(&self, position: i32) -> i32 {
        unsafe { (self.api.storage_load_value)(position) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockLibrary;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::ffi::{c_float, c_int, c_void};
    use wattle_sys as sys;

    thread_local! {
        static FLOAT_BUFFER: Cell<[c_float; 16]> = const { Cell::new([0.0; 16]) };
        static STORAGE: RefCell<HashMap<c_int, c_int>> = RefCell::new(HashMap::new());
        static RAND_STATE: Cell<u32> = const { Cell::new(0x2545_f491) };
    }

    fn publish(values: &[c_float]) -> *mut c_float {
        let mut buffer = [0.0; 16];
        buffer[..values.len()].copy_from_slice(values);
        FLOAT_BUFFER.set(buffer);
        FLOAT_BUFFER.with(|cell| cell.as_ptr().cast::<c_float>())
    }

    extern "C" fn mock_color_to_float(color: sys::Color) -> *mut c_float {
        publish(&[
            color.r as c_float / 255.0,
            color.g as c_float / 255.0,
            color.b as c_float / 255.0,
            color.a as c_float / 255.0,
        ])
    }

    extern "C" fn mock_vector_to_float(vec: sys::Vector3) -> *mut c_float {
        publish(&[vec.x, vec.y, vec.z])
    }

    extern "C" fn mock_matrix_to_float(mat: sys::Matrix) -> *mut c_float {
        publish(&[
            mat.m0, mat.m1, mat.m2, mat.m3, mat.m4, mat.m5, mat.m6, mat.m7, mat.m8, mat.m9,
            mat.m10, mat.m11, mat.m12, mat.m13, mat.m14, mat.m15,
        ])
    }

    extern "C" fn returns_null(_: sys::Color) -> *mut c_float {
        std::ptr::null_mut()
    }

    extern "C" fn mock_get_random_value(mut min: c_int, mut max: c_int) -> c_int {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        let mut state = RAND_STATE.get();
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        RAND_STATE.set(state);
        let span = (max - min).unsigned_abs() + 1;
        (state % span) as c_int + min
    }

    extern "C" fn mock_get_color(hex: c_int) -> sys::Color {
        let bytes = (hex as u32).to_be_bytes();
        sys::Color {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }

    extern "C" fn mock_get_hex_value(color: sys::Color) -> c_int {
        u32::from_be_bytes([color.r, color.g, color.b, color.a]) as c_int
    }

    extern "C" fn mock_fade(color: sys::Color, alpha: c_float) -> sys::Color {
        sys::Color {
            a: (255.0 * alpha.clamp(0.0, 1.0)) as u8,
            ..color
        }
    }

    extern "C" fn mock_storage_save_value(position: c_int, value: c_int) {
        STORAGE.with_borrow_mut(|storage| storage.insert(position, value));
    }

    extern "C" fn mock_storage_load_value(position: c_int) -> c_int {
        STORAGE.with_borrow(|storage| storage.get(&position).copied().unwrap_or(0))
    }

    fn float_mocks() -> MockLibrary {
        MockLibrary::new()
            .with("ColorToFloat", mock_color_to_float as *const c_void)
            .with("VectorToFloat", mock_vector_to_float as *const c_void)
            .with("MatrixToFloat", mock_matrix_to_float as *const c_void)
    }

    #[test]
    fn color_to_float_normalizes_light_gray() {
        let mut rl = float_mocks().raylib();

        let floats = rl.color_to_float(Color::LIGHTGRAY).unwrap();
        assert_eq!(floats.len(), 4);
        let expected = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
        for (got, want) in floats.iter().zip(expected) {
            assert!((got - want).abs() < f32::EPSILON, "{got} != {want}");
        }
    }

    #[test]
    fn array_views_have_call_site_lengths() {
        let mut rl = float_mocks().raylib();

        assert_eq!(rl.vector_to_float(Vector3::new(1.0, 2.0, 3.0)).unwrap().len(), 3);
        assert_eq!(rl.color_to_float(Color::RED).unwrap().len(), 4);

        let matrix = rl.matrix_to_float(Matrix::IDENTITY).unwrap();
        assert_eq!(matrix.len(), 16);
        assert_eq!(matrix.to_array(), Matrix::IDENTITY.to_float_array());
    }

    #[test]
    fn copied_values_survive_the_next_call() {
        let mut rl = float_mocks().raylib();

        let first = rl.vector_to_float(Vector3::new(1.0, 2.0, 3.0)).unwrap().to_array();
        let second = rl.vector_to_float(Vector3::new(4.0, 5.0, 6.0)).unwrap().to_array();
        assert_eq!(first, [1.0, 2.0, 3.0]);
        assert_eq!(second, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn null_buffer_gives_no_view() {
        let mut rl = MockLibrary::new()
            .with("ColorToFloat", returns_null as *const c_void)
            .raylib();
        assert!(rl.color_to_float(Color::BLACK).is_none());
    }

    #[test]
    fn random_value_with_equal_bounds_is_that_bound() {
        let rl = MockLibrary::new()
            .with("GetRandomValue", mock_get_random_value as *const c_void)
            .raylib();

        for _ in 0..32 {
            assert_eq!(rl.get_random_value(5, 5), 5);
        }
        for _ in 0..32 {
            let value = rl.get_random_value(10, -10);
            assert!((-10..=10).contains(&value));
        }
    }

    #[test]
    fn hex_colours_are_forwarded_unchanged() {
        let rl = MockLibrary::new()
            .with("GetColor", mock_get_color as *const c_void)
            .with("GetHexValue", mock_get_hex_value as *const c_void)
            .with("Fade", mock_fade as *const c_void)
            .raylib();

        let color = rl.get_color(0xE62937FFu32 as i32);
        assert_eq!(color, Color::RED);
        assert_eq!(rl.get_hex_value(Color::RED) as u32, 0xE62937FF);
        assert_eq!(rl.fade(Color::RED, 0.0), Color::new(230, 41, 55, 0));
    }

    #[test]
    fn storage_slots_keep_values() {
        let rl = MockLibrary::new()
            .with("StorageSaveValue", mock_storage_save_value as *const c_void)
            .with("StorageLoadValue", mock_storage_load_value as *const c_void)
            .raylib();

        rl.storage_save_value(0, 1200);
        rl.storage_save_value(1, -7);
        assert_eq!(rl.storage_load_value(0), 1200);
        assert_eq!(rl.storage_load_value(1), -7);
        assert_eq!(rl.storage_load_value(2), 0);
    }
}
