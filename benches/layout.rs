use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use flowterm::{
    AnsiTerminal, BufferDevice, Cell, ColorDepth, Row, Section, Table, Widget, solarized,
};

fn terminal() -> AnsiTerminal<BufferDevice> {
    let device = BufferDevice::new(80, 25, ColorDepth::Ansi256);
    AnsiTerminal::new(device, &solarized()).expect("terminal")
}

fn grid_table(rows: usize) -> Table {
    let mut table = Table::new();
    for i in 0..rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(format!("entry {i}")));
        row.add_cell(Cell::new(
            "%(face-comment)sa longer description column that has to wrap when compressed",
        ));
        row.add_cell(Cell::new(format!("%(face-constant)s{}", i * 37)));
        table.add_row(row);
    }
    table
}

fn flow_table(cells: usize) -> Table {
    let mut table = Table::new();
    for i in 0..cells {
        table.add_cell(Cell::new(format!("item-{i:03}")));
    }
    table
}

fn column_allocation(c: &mut Criterion) {
    let table = grid_table(50);
    let term = terminal();
    c.bench_function("column_allocation", |b| {
        b.iter(|| {
            black_box(&table)
                .column_widths(&term, black_box(72))
                .expect("widths")
        });
    });
}

fn grid_render(c: &mut Criterion) {
    let table = grid_table(50);
    c.bench_function("grid_render", |b| {
        b.iter(|| {
            let mut term = terminal();
            black_box(&table).draw(&mut term, 72).expect("draw");
            black_box(term.into_device().output().len())
        });
    });
}

fn flow_render(c: &mut Criterion) {
    let table = flow_table(200);
    c.bench_function("flow_render", |b| {
        b.iter(|| {
            let mut term = terminal();
            black_box(&table).draw(&mut term, 72).expect("draw");
            black_box(term.into_device().output().len())
        });
    });
}

fn section_render(c: &mut Criterion) {
    let mut section = Section::new("benchmark");
    section.add_component(grid_table(20));
    section.add_component(flow_table(40));
    c.bench_function("section_render", |b| {
        b.iter(|| {
            let mut term = terminal();
            black_box(&section).draw(&mut term, 80).expect("draw");
            black_box(term.into_device().output().len())
        });
    });
}

criterion_group!(
    benches,
    column_allocation,
    grid_render,
    flow_render,
    section_render
);
criterion_main!(benches);
