//! Benchmarks for frame orientation and import

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csi_frames::prelude::*;

fn create_grid_tables(stories: usize, bays: usize) -> (FrameModel, Converter, CsiTables) {
    let mut model = FrameModel::new(3);
    let mut conv = Converter::new();
    conv.define("AnalSect", "section", "Column", 1);

    let story_height = 3.5;
    let bay_width = 6.0;

    // Create joints
    for story in 0..=stories {
        for bay in 0..=bays {
            let tag = story * (bays + 1) + bay + 1;
            let x = bay as f64 * bay_width;
            let z = story as f64 * story_height;
            model.add_node(tag, [x, 0.0, z]).unwrap();
            conv.define("Joint", "node", &format!("J{}_{}", story, bay), tag);
        }
    }

    // Columns and beams
    let mut connectivity = Vec::new();
    let mut sections = Vec::new();
    for story in 1..=stories {
        for bay in 0..=bays {
            let label = format!("C{}_{}", story, bay);
            connectivity.push(
                Row::new()
                    .with("Frame", label.as_str())
                    .with("JointI", format!("J{}_{}", story - 1, bay))
                    .with("JointJ", format!("J{}_{}", story, bay)),
            );
            sections.push(Row::new().with("Frame", label).with("AnalSect", "Column"));
        }
        for bay in 0..bays {
            let label = format!("B{}_{}", story, bay);
            connectivity.push(
                Row::new()
                    .with("Frame", label.as_str())
                    .with("JointI", format!("J{}_{}", story, bay))
                    .with("JointJ", format!("J{}_{}", story, bay + 1)),
            );
            sections.push(Row::new().with("Frame", label).with("AnalSect", "Column"));
        }
    }

    let mut csi = CsiTables::new();
    csi.insert("CONNECTIVITY - FRAME", connectivity);
    csi.insert("FRAME SECTION ASSIGNMENTS", sections);

    (model, conv, csi)
}

fn bench_orient(c: &mut Criterion) {
    let xi = Vec3::new(1.0, 2.0, 3.0);
    let xj = Vec3::new(7.0, -4.0, 9.5);

    c.bench_function("orient_inclined", |b| {
        b.iter(|| orient(black_box(&xi), black_box(&xj), black_box(30.0)))
    });

    let top = Vec3::new(1.0, 2.0, 6.5);
    c.bench_function("orient_vertical", |b| {
        b.iter(|| orient(black_box(&xi), black_box(&top), black_box(0.0)))
    });
}

fn bench_import(c: &mut Criterion) {
    let (model, conv, csi) = create_grid_tables(10, 5);
    let config = ImportConfig::default();

    c.bench_function("create_frames_10x5", |b| {
        b.iter(|| {
            let mut model = model.clone();
            let mut conv = conv.clone();
            let mut library = Library::new();
            create_frames(black_box(&csi), &mut model, &mut library, &config, &mut conv).unwrap()
        })
    });
}

criterion_group!(benches, bench_orient, bench_import);
criterion_main!(benches);
