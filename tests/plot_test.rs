use std::fs;

use spotmood::plot::render_scatter;

#[test]
fn test_render_scatter_writes_svg() {
    let dir = std::env::temp_dir().join(format!("spotmood-plot-{}", std::process::id()));
    let path = dir.join("nested/mood_distribution.svg");

    render_scatter(&path, &[(0.8, 0.9), (0.6, 0.5), (0.1, 0.2)]).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Music Mood Distribution"));
    assert_eq!(svg.matches("<circle").count(), 3);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_render_scatter_without_points() {
    let dir = std::env::temp_dir().join(format!("spotmood-plot-empty-{}", std::process::id()));
    let path = dir.join("empty.svg");

    render_scatter(&path, &[]).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<circle").count(), 0);

    let _ = fs::remove_dir_all(&dir);
}
