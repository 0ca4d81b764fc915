//! Builders for small uncompressed Level 5 MAT-files.

#![allow(dead_code)]

/// miMATRIX tag type.
const MI_MATRIX: u32 = 14;

/// Wrap arrays in a 128-byte little-endian MAT-file header.
pub fn mat_file(arrays: &[Vec<u8>]) -> Vec<u8> {
    let mut text = b"MATLAB 5.0 MAT-file, Platform: test, Created on: Sun Oct 18 12:00:00 2026".to_vec();
    text.resize(116, b' ');

    let mut out = text;
    out.extend_from_slice(&[0u8; 8]); // subsystem data offset
    out.extend(0x0100u16.to_le_bytes()); // version
    out.extend_from_slice(b"IM"); // little-endian indicator
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// A tagged data element, padded to a multiple of 8 bytes.
fn element(data_type: u32, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + data.len() + 7);
    out.extend(data_type.to_le_bytes());
    out.extend((data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    while out.len() % 8 != 0 {
        out.push(0);
    }
    out
}

/// A numeric miMATRIX element.
pub fn numeric_array(
    name: &str,
    class: u8,
    dims: &[i32],
    data_type: u32,
    real: &[u8],
    imag: Option<&[u8]>,
) -> Vec<u8> {
    let complex = if imag.is_some() { 0x0800 } else { 0 };
    let mut flags = Vec::with_capacity(8);
    flags.extend((u32::from(class) | complex).to_le_bytes());
    flags.extend(0u32.to_le_bytes());

    let dim_bytes: Vec<u8> = dims.iter().flat_map(|d| d.to_le_bytes()).collect();

    let mut body = element(6, &flags); // miUINT32
    body.extend(element(5, &dim_bytes)); // miINT32
    body.extend(element(1, name.as_bytes())); // miINT8
    body.extend(element(data_type, real));
    if let Some(imag) = imag {
        body.extend(element(data_type, imag));
    }

    let mut out = Vec::with_capacity(8 + body.len());
    out.extend(MI_MATRIX.to_le_bytes());
    out.extend((body.len() as u32).to_le_bytes());
    out.extend(body);
    out
}

pub fn doubles(name: &str, dims: &[i32], values: &[f64]) -> Vec<u8> {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    numeric_array(name, 6, dims, 9, &bytes, None)
}

pub fn complex_doubles(name: &str, dims: &[i32], real: &[f64], imag: &[f64]) -> Vec<u8> {
    let re: Vec<u8> = real.iter().flat_map(|v| v.to_le_bytes()).collect();
    let im: Vec<u8> = imag.iter().flat_map(|v| v.to_le_bytes()).collect();
    numeric_array(name, 6, dims, 9, &re, Some(&im))
}

pub fn singles(name: &str, dims: &[i32], values: &[f32]) -> Vec<u8> {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    numeric_array(name, 7, dims, 7, &bytes, None)
}

pub fn int16s(name: &str, dims: &[i32], values: &[i16]) -> Vec<u8> {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    numeric_array(name, 10, dims, 3, &bytes, None)
}

pub fn int32s(name: &str, dims: &[i32], values: &[i32]) -> Vec<u8> {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    numeric_array(name, 12, dims, 5, &bytes, None)
}

pub fn uint8s(name: &str, dims: &[i32], values: &[u8]) -> Vec<u8> {
    numeric_array(name, 9, dims, 2, values, None)
}
