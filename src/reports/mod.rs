use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use replaystat::stats::notes::GRID_CELLS;
use replaystat::stats::ScoreStatistic;

const GRID_COLUMNS: usize = 4;

/// Samples shown in the condensed score graph row.
const GRAPH_PREVIEW_POINTS: usize = 12;

pub fn print_statistic(name: &str, stat: &ScoreStatistic) {
    print_summary_report(name, stat);
    print_accuracy_report(stat);
    print_grid(&stat.accuracy_tracker.grid_acc);
    print_graph(&stat.score_graph_tracker.graph);
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_summary_report(name: &str, stat: &ScoreStatistic) {
    let w = &stat.win_tracker;
    let h = &stat.hit_tracker;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Play").add_attribute(Attribute::Bold),
        Cell::new("Result"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Combo"),
        Cell::new("Miss").fg(Color::Red),
        Cell::new("Bad").fg(Color::Red),
        Cell::new("Bomb").fg(Color::Red),
        Cell::new("Pause"),
        Cell::new("End (s)"),
        Cell::new("Height"),
        Cell::new("JD"),
    ]);
    right_align(&mut table, 2..=10);

    let result = if w.won {
        Cell::new("Clear").fg(Color::Green)
    } else {
        Cell::new("Fail").fg(Color::Red)
    };

    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        result,
        Cell::new(w.total_score).fg(Color::Cyan),
        Cell::new(h.max_combo),
        Cell::new(format!("{} | {}", h.left_miss, h.right_miss)),
        Cell::new(format!("{} | {}", h.left_bad_cuts, h.right_bad_cuts)),
        Cell::new(format!("{} | {}", h.left_bombs, h.right_bombs)),
        Cell::new(w.nb_of_pause),
        Cell::new(format!("{:.1}", w.end_time)),
        Cell::new(format!("{:.2}", w.average_height)),
        Cell::new(format!("{:.2}", w.jump_distance)),
    ]);
    println!("\n{}", table);
}

fn cut_text(values: &[f32], i: usize) -> String {
    values.get(i).map_or("-".to_string(), |v| format!("{:.2}", v))
}

pub fn print_accuracy_report(stat: &ScoreStatistic) {
    let a = &stat.accuracy_tracker;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Saber").add_attribute(Attribute::Bold),
        Cell::new("Acc").fg(Color::Cyan),
        Cell::new("Pre"),
        Cell::new("Center"),
        Cell::new("Post"),
        Cell::new("Preswing"),
        Cell::new("Postswing"),
        Cell::new("TimeDep"),
    ]);
    right_align(&mut table, 1..=7);

    let sides = [
        (
            "Left",
            Color::Red,
            a.acc_left,
            &a.left_average_cut,
            a.left_preswing,
            a.left_postswing,
            a.left_time_dependence,
        ),
        (
            "Right",
            Color::Blue,
            a.acc_right,
            &a.right_average_cut,
            a.right_preswing,
            a.right_postswing,
            a.right_time_dependence,
        ),
    ];

    for (name, color, acc, cuts, pre, post, time_dep) in sides {
        table.add_row(vec![
            Cell::new(name).fg(color).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", acc)).fg(Color::Cyan),
            Cell::new(cut_text(cuts, 0)),
            Cell::new(cut_text(cuts, 1)),
            Cell::new(cut_text(cuts, 2)),
            Cell::new(format!("{:.1}%", pre * 100.0)),
            Cell::new(format!("{:.1}%", post * 100.0)),
            Cell::new(format!("{:.3}", time_dep)),
        ]);
    }
    println!("\n{}", table);
    println!("Average preswing: {:.1}%", a.average_preswing * 100.0);
}

/// Prints the 4x3 note grid with the top layer first.
pub fn print_grid(grid: &[f32]) {
    println!("\nGrid accuracy:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cells = &grid[..grid.len().min(GRID_CELLS)];
    let rows: Vec<&[f32]> = cells.chunks(GRID_COLUMNS).collect();
    for row in rows.iter().rev() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&v| {
                let text = if v > 0.0 {
                    format!("{:.1}", v)
                } else {
                    " ".to_string()
                };
                Cell::new(text).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_graph(graph: &[f32]) {
    if graph.is_empty() {
        println!("\nScore graph: (no frames)");
        return;
    }

    let step = graph.len().div_ceil(GRAPH_PREVIEW_POINTS).max(1);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let points: Vec<(usize, f32)> = graph.iter().copied().enumerate().step_by(step).collect();
    table.add_row(
        points
            .iter()
            .map(|(s, _)| Cell::new(format!("{}s", s)).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        points
            .iter()
            .map(|(_, v)| Cell::new(format!("{:.2}%", v * 100.0)).set_alignment(CellAlignment::Right))
            .collect::<Vec<_>>(),
    );
    println!("\nScore graph ({} s):\n{}", graph.len(), table);
}
