use image::ImageEncoder;
use model_registrar::{
    extract_textures, load_asset_pack, Direction, Manifest, ModelResolver, RecordingSink,
    Registrar, RegistrarError, ResourceLocation, BlockShape, Cuboid,
};
use std::fs;
use std::path::Path;

fn png(rgba: [u8; 4]) -> Vec<u8> {
    let pixels: Vec<u8> = rgba.iter().copied().cycle().take(16 * 16 * 4).collect();
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut bytes))
        .write_image(&pixels, 16, 16, image::ExtendedColorType::Rgba8)
        .unwrap();
    bytes
}

fn write(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn build_pack(root: &Path) {
    write(
        root,
        "assets/minecraft/models/block/cube.json",
        br#"{ "elements": [ { "from": [0, 0, 0], "to": [16, 16, 16] } ] }"#,
    );
    write(
        root,
        "assets/minecraft/models/block/cube_bottom_top.json",
        br##"{
            "parent": "block/cube",
            "textures": { "particle": "#side", "down": "#bottom", "up": "#top",
                          "north": "#side", "south": "#side", "east": "#side", "west": "#side" }
        }"##,
    );
    write(
        root,
        "assets/stonecraft/models/block/marble_pillar.json",
        br#"{
            "parent": "block/cube_bottom_top",
            "textures": { "bottom": "stonecraft:blocks/marble_top",
                          "top": "stonecraft:blocks/marble_top",
                          "side": "stonecraft:blocks/marble_side" }
        }"#,
    );
    write(
        root,
        "assets/stonecraft/models/block/marble_post.json",
        br#"{
            "parent": "stonecraft:block/marble_pillar",
            "elements": [ { "from": [10, 16, 10], "to": [6, 0, 6] } ]
        }"#,
    );
    write(
        root,
        "assets/stonecraft/models/block/marble_fern.json",
        br#"{ "textures": { "cross": "stonecraft:blocks/fern" } }"#,
    );
    write(
        root,
        "assets/stonecraft/models/block/loop_a.json",
        br#"{ "parent": "stonecraft:block/loop_b" }"#,
    );
    write(
        root,
        "assets/stonecraft/models/block/loop_b.json",
        br#"{ "parent": "stonecraft:block/loop_a" }"#,
    );
    write(
        root,
        "assets/stonecraft/models/block/cracked.json",
        br#"{ "textures": { "all": "stonecraft:blocks/cracked" } }"#,
    );

    write(root, "assets/stonecraft/textures/blocks/marble_top.png", &png([250, 250, 250, 255]));
    write(root, "assets/stonecraft/textures/blocks/marble_side.png", &png([230, 230, 230, 255]));
    write(root, "assets/stonecraft/textures/blocks/fern.png", &png([20, 160, 20, 255]));
}

const MANIFEST: &str = r#"{
    "blocks": [
        { "domain": "stonecraft", "name": "marble_pillar", "meta": 0, "model": "stonecraft:marble_pillar" },
        { "domain": "stonecraft", "name": "marble_pillar", "meta": 4, "model": "stonecraft:marble_pillar", "x": 90 },
        { "domain": "stonecraft", "name": "loop", "model": "stonecraft:loop_a" },
        { "domain": "stonecraft", "name": "missing", "model": "stonecraft:nothing" },
        { "domain": "stonecraft", "name": "cracked", "model": "stonecraft:cracked" },
        { "domain": "stonecraft", "name": "marble_post", "meta": 1, "model": "stonecraft:marble_post" },
        { "domain": "stonecraft", "name": "fern", "shape": "plant", "model": "stonecraft:marble_fern" },
        { "domain": "stonecraft", "name": "marble_wall", "shape": "wall", "model": "stonecraft:marble_pillar" }
    ]
}"#;

#[test]
fn publish_cycle_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    build_pack(dir.path());

    let pack = load_asset_pack(dir.path()).unwrap();
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let resolver = ModelResolver::new(&pack);
    let mut registrar = Registrar::new(&pack, RecordingSink::new());

    let report = registrar.register_manifest(&resolver, &manifest);
    assert_eq!(registrar.publish(), 1);

    // Failures are isolated to their own entries.
    assert_eq!(report.registered, 5);
    let failed: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.block.as_str(), &f.error))
        .collect();
    assert_eq!(failed.len(), 3);
    assert!(matches!(failed[0], ("loop", RegistrarError::CyclicParentChain(_))));
    assert!(matches!(failed[1], ("missing", RegistrarError::DocumentNotFound(_))));
    assert!(matches!(failed[2], ("cracked", RegistrarError::UnsupportedTexture { .. })));

    let sink = registrar.into_sink();
    let marble_top = ResourceLocation::parse("stonecraft:blocks/marble_top");
    let marble_side = ResourceLocation::parse("stonecraft:blocks/marble_side");
    assert_eq!(sink.registration_count(&marble_top), 1);
    assert_eq!(sink.registration_count(&marble_side), 1);
    assert_eq!(sink.textures.len(), 3);

    let pillar = sink.block("stonecraft", "marble_pillar", Some(0)).unwrap();
    assert_eq!(
        pillar.shapes,
        vec![BlockShape::Cuboids(vec![Cuboid::new([0.0; 3], [1.0; 3])])]
    );
    let top = pillar.texture_for(Direction::Up).unwrap();
    let side = pillar.texture_for(Direction::East).unwrap();
    assert_eq!(sink.texture_file(top), Some("stonecraft/textures/blocks/marble_top.png"));
    assert_eq!(sink.texture_file(side), Some("stonecraft/textures/blocks/marble_side.png"));
    assert_eq!(pillar.texture_for(Direction::Down), Some(top));

    let post = sink.block("stonecraft", "marble_post", Some(1)).unwrap();
    assert_eq!(
        post.shapes,
        vec![BlockShape::Cuboids(vec![Cuboid::new([0.375, 0.0, 0.375], [0.625, 1.0, 0.625])])]
    );

    let fern = sink.block("stonecraft", "fern", None).unwrap();
    assert_eq!(fern.shapes, vec![BlockShape::Plant]);
    assert_eq!(fern.faces.len(), 1);

    let wall = sink.block("stonecraft", "marble_wall", None).unwrap();
    assert_eq!(wall.shapes, vec![BlockShape::Wall]);
    assert!(Direction::ALL.iter().all(|d| wall.texture_for(*d).is_some()));

    assert!(sink.domain("stonecraft").unwrap().published);

    let target = tempfile::tempdir().unwrap();
    let copied = extract_textures(&pack, &manifest.domains(), target.path()).unwrap();
    assert_eq!(copied, 3);
    assert!(target
        .path()
        .join("stonecraft/textures/blocks/fern.png")
        .exists());
}

#[test]
fn rotated_variant_keeps_textures() {
    let dir = tempfile::tempdir().unwrap();
    build_pack(dir.path());
    let pack = load_asset_pack(dir.path()).unwrap();
    let resolver = ModelResolver::new(&pack);

    let pillar = resolver.resolve("stonecraft:marble_pillar").unwrap();
    let rotated = pillar.rotate_x(90);

    assert_eq!(rotated.resolved_textures(), pillar.resolved_textures());
    assert_eq!(pillar.rotate_x(360), pillar);
    assert_eq!(resolver.resolve("stonecraft:marble_pillar").unwrap(), pillar);
}
