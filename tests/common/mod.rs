//! Builds synthetic `.ase` files for tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct AseBuilder {
    blocks: Vec<Vec<u8>>,
}

impl AseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(self, name: &str) -> Self {
        self.block(0xC001, name_bytes(name))
    }

    pub fn end_group(self) -> Self {
        self.block(0xC002, Vec::new())
    }

    pub fn rgb(self, name: &str, r: f32, g: f32, b: f32) -> Self {
        self.color(name, b"RGB ", &[r, g, b])
    }

    pub fn cmyk(self, name: &str, c: f32, m: f32, y: f32, k: f32) -> Self {
        self.color(name, b"CMYK", &[c, m, y, k])
    }

    pub fn gray(self, name: &str, v: f32) -> Self {
        self.color(name, b"Gray", &[v])
    }

    pub fn lab(self, name: &str, l: f32, a: f32, b: f32) -> Self {
        self.color(name, b"LAB ", &[l, a, b])
    }

    pub fn color(self, name: &str, model: &[u8; 4], values: &[f32]) -> Self {
        let mut body = name_bytes(name);
        body.extend_from_slice(model);
        for v in values {
            body.extend_from_slice(&v.to_be_bytes());
        }
        body.extend_from_slice(&2u16.to_be_bytes());
        self.block(0x0001, body)
    }

    pub fn block(mut self, block_type: u16, body: Vec<u8>) -> Self {
        let mut out = block_type.to_be_bytes().to_vec();
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend(body);
        self.blocks.push(out);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = b"ASEF".to_vec();
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&(self.blocks.len() as u32).to_be_bytes());
        for block in self.blocks {
            out.extend(block);
        }
        out
    }

    /// Write the file into `dir` and return its path.
    pub fn write_to(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

fn name_bytes(name: &str) -> Vec<u8> {
    let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    let mut out = (units.len() as u16).to_be_bytes().to_vec();
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}
