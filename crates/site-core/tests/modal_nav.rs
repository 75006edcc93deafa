use site_core::{synthesize_project, ModalNav};

fn project_with(folder: &str, images: usize) -> site_core::Project {
    let names: Vec<String> = (0..images).map(|i| format!("img-{i}.jpg")).collect();
    synthesize_project(0, folder, &names)
}

#[test]
fn forward_then_back_restores_index() {
    for len in 1..6 {
        let project = project_with("Harsha", len);
        let mut nav = ModalNav::new();
        nav.open(&project);
        for start in 0..len {
            while nav.index() != Some(start) {
                nav.navigate(1);
            }
            nav.navigate(1);
            assert_eq!(nav.navigate(-1), Some(start));
        }
    }
}

#[test]
fn archan_with_three_images_cycles_back_to_start() {
    let project = project_with("Archan", 3);
    assert_eq!(project.id, "archan");
    let mut nav = ModalNav::new();
    nav.open(&project);
    assert_eq!(nav.counter(), Some((1, 3)));
    nav.navigate(1);
    nav.navigate(1);
    assert_eq!(nav.counter(), Some((3, 3)));
    assert_eq!(nav.navigate(1), Some(0));
}

#[test]
fn close_hands_back_the_project_for_focus() {
    let project = project_with("HP Cafeteria", 2);
    let mut nav = ModalNav::new();
    nav.open(&project);
    assert_eq!(nav.close().as_deref(), Some("hp-cafeteria"));
    assert!(!nav.is_open());
    assert_eq!(nav.counter(), None);
}
