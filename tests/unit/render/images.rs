use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn normalize_rel_path_cleans_and_rejects_escapes() {
    assert_eq!(normalize_rel_path("./a//b\\c.png").unwrap(), "a/b/c.png");
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("../up.png").is_err());
    assert!(normalize_rel_path("./").is_err());
    assert!(normalize_rel_path("").is_err());
}

#[test]
fn decode_premultiplies() {
    let img = decode_image(&png_bytes(2, 1, [200, 100, 0, 128])).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
    assert_eq!(&img.rgba8_premul[..4], &[100, 50, 0, 128]);
}

#[test]
fn base64_data_uri_loads() {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png_bytes(3, 2, [1, 2, 3, 255]));
    let uri = format!("data:image/png;base64,{b64}");
    let img = FsImageLoader::new("/nonexistent").load(&ImageRef::new(uri)).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
}

#[test]
fn percent_encoded_data_uri_decodes() {
    assert_eq!(decode_data_uri("data:text/plain,a%20b").unwrap(), b"a b");
    assert!(decode_data_uri("data:text/plain,%zz").is_err());
    assert!(decode_data_uri("data:no-comma").is_err());
}

#[test]
fn relative_files_resolve_against_root() {
    let dir = std::env::temp_dir().join(format!("carousel-images-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("img")).unwrap();
    std::fs::write(dir.join("img/a.png"), png_bytes(4, 4, [0, 0, 0, 255])).unwrap();

    let loader = FsImageLoader::new(&dir);
    let img = loader.load(&"./img/a.png".into()).unwrap();
    assert_eq!(img.width, 4);

    let err = loader.load(&"img/missing.png".into()).unwrap_err();
    assert!(matches!(err, CarouselError::ImageLoad(_)));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn remote_schemes_are_rejected() {
    let err = FsImageLoader::new(".")
        .load(&"https://example.com/a.png".into())
        .unwrap_err();
    assert!(err.to_string().contains("unsupported image scheme"));
}
