use dfglut::io::ppm::write_ppm;
use dfglut::io::raw::{read_raw, write_raw};
use dfglut::math::bitmap::Bitmap;
use dfglut::renderers::table::{Renderer, TableRenderer};
use dfglut::DfgIntegrator;

fn render_small_table() -> Bitmap {
    let integrator = DfgIntegrator::new(64).unwrap();
    TableRenderer::new(Box::new(integrator), 4)
        .with_threads(2)
        .render()
        .unwrap()
}

#[test]
fn test_small_table_raw_output() {
    let table = render_small_table();
    assert_eq!(table.texels().len(), 16);
    for texel in table.texels() {
        assert!(texel.is_finite());
        assert!(texel.dfg1 >= 0.0 && texel.dfg1 <= 1.01);
        assert!(texel.dfg2 >= 0.0 && texel.dfg2 <= 1.01);
    }

    let mut bytes = Vec::new();
    write_raw(&mut bytes, &table).unwrap();
    assert_eq!(bytes.len(), 4 * 4 * 2 * 2);

    let decoded = read_raw(&bytes, 4).unwrap();
    for (a, b) in decoded.texels().iter().zip(table.texels()) {
        assert!((a.dfg1 - b.dfg1).abs() < 1e-3);
        assert!((a.dfg2 - b.dfg2).abs() < 1e-3);
    }
}

#[test]
fn test_small_table_ppm_output() {
    let table = render_small_table();
    let mut bytes = Vec::new();
    write_ppm(&mut bytes, &table).unwrap();

    let header = b"P6\n4 4\n255\n";
    assert!(bytes.starts_with(header));
    assert_eq!(bytes.len(), header.len() + 16 * 3);
    // Blue is always empty.
    for pixel in bytes[header.len()..].chunks_exact(3) {
        assert_eq!(pixel[2], 0);
    }
}
