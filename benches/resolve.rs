use criterion::{black_box, criterion_group, criterion_main, Criterion};

use folio::{curate, ContentCategory, PageContentEntryConfig, Project, ProjectSource, RepoInfo};

fn catalog(n: usize) -> Vec<Project> {
    (0..n)
        .map(|i| Project {
            slug: format!("repo-{}", i),
            name: format!("Repo {}", i),
            description: None,
            category: (i % 5 != 0).then(|| "tooling".to_string()),
            url: None,
            date: None,
            source: ProjectSource::GitHub(RepoInfo {
                owner: "octo".to_string(),
                repo: format!("repo-{}", i),
                fork: i % 7 == 0,
                archived: false,
                stars: i as u32,
            }),
        })
        .collect()
}

fn bench_curate(c: &mut Criterion) {
    let projects = catalog(500);
    let config = PageContentEntryConfig {
        limit: Some(12),
        pin: (0..10).map(|i| format!("repo-{}", i * 37)).collect(),
        show: (0..10).map(|i| format!("repo-{}", i * 41)).collect(),
        hide: (0..10).map(|i| format!("repo-{}", i * 43)).collect(),
        ..Default::default()
    };

    c.bench_function("curate 500 projects", |b| {
        b.iter(|| curate(ContentCategory::Projects, black_box(&projects), Some(&config)))
    });
}

criterion_group!(benches, bench_curate);
criterion_main!(benches);
