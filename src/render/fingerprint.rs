use crate::{compose::tree::VisualTree, foundation::math::Fnv1a64};

/// 128-bit content hash of a visual tree, built from two independently seeded FNV-1a streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Hash everything that affects pixels.
///
/// Identity fields (slide id, position, layer ids) are skipped, so two slides that draw the
/// same thing share a fingerprint.
pub fn fingerprint_tree(tree: &VisualTree) -> TreeFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_str_pair(&mut a, &mut b, tree.template.as_str());
    write_u32_pair(&mut a, &mut b, color_bits(tree.background));
    write_u64_pair(&mut a, &mut b, tree.layers.len() as u64);
    for layer in &tree.layers {
        let mut value = serde_json::to_value(layer).unwrap_or(serde_json::Value::Null);
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("id");
        }
        write_json_value_pair(&mut a, &mut b, &value);
    }

    TreeFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn color_bits(c: crate::foundation::core::Color) -> u32 {
    u32::from_be_bytes([c.r, c.g, c.b, c.a])
}

fn write_json_value_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => write_u8_pair(a, b, 0),
        serde_json::Value::Bool(x) => {
            write_u8_pair(a, b, 1);
            write_u8_pair(a, b, u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            write_u8_pair(a, b, 2);
            write_str_pair(a, b, &n.to_string());
        }
        serde_json::Value::String(s) => {
            write_u8_pair(a, b, 3);
            write_str_pair(a, b, s);
        }
        serde_json::Value::Array(items) => {
            write_u8_pair(a, b, 4);
            write_u64_pair(a, b, items.len() as u64);
            for item in items {
                write_json_value_pair(a, b, item);
            }
        }
        serde_json::Value::Object(map) => {
            write_u8_pair(a, b, 5);
            write_u64_pair(a, b, map.len() as u64);
            // serde_json's default map is ordered by key.
            for (k, item) in map {
                write_str_pair(a, b, k);
                write_json_value_pair(a, b, item);
            }
        }
    }
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_u32_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u32) {
    a.write_bytes(&v.to_le_bytes());
    b.write_bytes(&v.to_le_bytes());
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_bytes(&[v]);
    b.write_bytes(&[v]);
}
