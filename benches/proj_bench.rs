use criterion::{black_box, criterion_group, criterion_main, Criterion};

use groundtrack::body::TITAN;
use groundtrack::proj::equirectangular::{Equirectangular, EquirectangularGc};
use groundtrack::proj::mollweide::Mollweide;
use groundtrack::proj::orthographic::Orthographic;
use groundtrack::proj::stereographic::Stereographic;
use groundtrack::{GeoPath, Projection};

fn make_coords(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (t * 360.0, -80.0 + t * 160.0)
        })
        .collect()
}

// Circular footprint around a ground point, in degrees of angular radius
fn make_footprint(lon_w_0: f64, lat_0: f64, radius_deg: f64, n: usize) -> GeoPath {
    let verts = (0..n)
        .map(|i| {
            let th = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            (
                lon_w_0 + radius_deg * th.cos() / lat_0.to_radians().cos().max(0.2),
                lat_0 + radius_deg * th.sin(),
            )
        })
        .collect();
    GeoPath::new(verts)
}

fn bench_forward_throughput(c: &mut Criterion) {
    // Points/sec per projection on a full-body sweep
    let n = 1_000_000_usize;
    let template = make_coords(n);

    let equi = Equirectangular::on_body(&TITAN);
    let mut coords = template.clone();
    c.bench_function("forward_equirectangular_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&template);
            equi.forward_batch(&mut coords).unwrap();
            black_box(&coords);
        });
    });

    let ortho = Orthographic::on_body(0.0, 0.0, &TITAN);
    let mut coords = template.clone();
    c.bench_function("forward_orthographic_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&template);
            ortho.forward_batch(&mut coords).unwrap();
            black_box(&coords);
        });
    });

    let stere = Stereographic::on_body(0.0, 90.0, &TITAN);
    let mut coords = template.clone();
    c.bench_function("forward_stereographic_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&template);
            stere.forward_batch(&mut coords).unwrap();
            black_box(&coords);
        });
    });

    let moll = Mollweide::on_body(0.0, &TITAN);
    let mut coords = template.clone();
    c.bench_function("forward_mollweide_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&template);
            moll.forward_batch(&mut coords).unwrap();
            black_box(&coords);
        });
    });
}

fn bench_inverse_throughput(c: &mut Criterion) {
    let n = 1_000_000_usize;
    let equi = Equirectangular::on_body(&TITAN);
    let template: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (-8.0e6 + t * 1.6e7, -4.0e6 + t * 8.0e6)
        })
        .collect();
    let mut coords = template.clone();

    c.bench_function("inverse_equirectangular_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&template);
            equi.inverse_batch(&mut coords).unwrap();
            black_box(&coords);
        });
    });
}

fn bench_footprint_paths(c: &mut Criterion) {
    let equi = Equirectangular::on_body(&TITAN);

    // Mid-latitude ring: no seam repair
    let plain = make_footprint(90.0, 20.0, 5.0, 64);
    c.bench_function("path_equi_plain_64", |b| {
        b.iter(|| black_box(equi.forward_path(&plain).unwrap()));
    });

    // Ring encircling the north pole: bridged through the top edge of the map
    let polar = GeoPath::new(
        (0..64)
            .map(|i| (360.0 * i as f64 / 64.0, 80.0))
            .collect(),
    );
    c.bench_function("path_equi_pole_wrap_64", |b| {
        b.iter(|| black_box(equi.forward_path(&polar).unwrap()));
    });

    // Antimeridian ring: split into two polygons
    let seam = make_footprint(180.0, 0.0, 5.0, 64);
    let off_center = Equirectangular::new(0.0, 0.0, 0.0, TITAN.radius_m());
    c.bench_function("path_equi_split_64", |b| {
        b.iter(|| black_box(off_center.forward_path(&seam).unwrap()));
    });
}

fn bench_great_circle_densify(c: &mut Criterion) {
    let path = make_footprint(90.0, 20.0, 15.0, 16);

    for &npt in &[4usize, 8, 32] {
        let proj = EquirectangularGc::new(Equirectangular::on_body(&TITAN), npt);
        c.bench_function(&format!("path_equi_gc_16x{npt}"), |b| {
            b.iter(|| black_box(proj.forward_path(&path).unwrap()));
        });
    }
}

fn bench_limb_clip(c: &mut Criterion) {
    let ortho = Orthographic::on_body(0.0, 90.0, &TITAN);

    // Half the ring dips behind the limb and gets resampled along it
    let straddling = make_footprint(0.0, 0.0, 30.0, 64);
    c.bench_function("path_ortho_limb_clip_64", |b| {
        b.iter(|| black_box(ortho.forward_path(&straddling).unwrap()));
    });

    let visible = make_footprint(0.0, 80.0, 5.0, 64);
    c.bench_function("path_ortho_visible_64", |b| {
        b.iter(|| black_box(ortho.forward_path(&visible).unwrap()));
    });
}

fn bench_graticule(c: &mut Criterion) {
    let ortho = Orthographic::on_body(0.0, 30.0, &TITAN);
    c.bench_function("graticule_ortho_30deg", |b| {
        b.iter(|| {
            black_box(ortho.meridians(30.0, 61));
            black_box(ortho.parallels(30.0, 121));
        });
    });
}

criterion_group!(
    benches,
    bench_forward_throughput,
    bench_inverse_throughput,
    bench_footprint_paths,
    bench_great_circle_densify,
    bench_limb_clip,
    bench_graticule
);
criterion_main!(benches);
