use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccg_combat::cards::starter::{starter_catalog, starter_deck};
use ccg_combat::combat::CombatEngine;
use ccg_combat::core::CombatConfig;
use ccg_combat::enemy::{starter_bestiary, GOLEM};
use ccg_combat::fx::EffectScheduler;
use ccg_combat::session::Session;
use ccg_combat::ui::{CharGrid, Color, Region, ScriptedInput};

fn bench_session_frames(c: &mut Criterion) {
    let catalog = starter_catalog();
    c.bench_function("session_100_frames", |b| {
        b.iter(|| {
            let combat = CombatEngine::standard(
                &catalog,
                CombatConfig::default().with_seed(3),
                starter_bestiary(),
                starter_deck(),
                GOLEM,
            )
            .expect("standard setup");
            let mut session = Session::new(combat);
            let mut input = ScriptedInput::from_keys("1  2  3  e      1 2 e");
            let mut screen = CharGrid::screen();
            for _ in 0..100 {
                black_box(session.frame(&mut input, &mut screen));
            }
        });
    });
}

fn bench_full_pool(c: &mut Criterion) {
    c.bench_function("scheduler_full_pool_tick", |b| {
        let mut screen = CharGrid::screen();
        b.iter(|| {
            let mut fx = EffectScheduler::new();
            fx.add_shake(Region::new(0, 3, 40, 1));
            fx.add_shake(Region::new(0, 5, 20, 2));
            fx.add_flash(Region::new(0, 0, 40, 1), Color::RED);
            fx.add_flash(Region::new(27, 0, 8, 1), Color::LIGHT_BLUE);
            fx.add_damage_number(31, 3, 14, true);
            fx.add_damage_number(5, 1, 7, false);
            fx.add_card_highlight(0);
            fx.add_card_highlight(1);
            while fx.active_count() > 0 {
                fx.update(&mut screen);
                fx.render(&mut screen);
            }
            black_box(&screen);
        });
    });
}

criterion_group!(benches, bench_session_frames, bench_full_pool);
criterion_main!(benches);
