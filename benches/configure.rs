use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leadacid::options::standard::SIDE_REACTIONS;
use leadacid::{
    LeadAcidParameters, ModelConfig, ModelConfigurator, OptionValue, ReactionNetworkBuilder,
};

fn bench_configure_standard(c: &mut Criterion) {
    let config = ModelConfig::default();
    c.bench_function("configure/standard", |b| {
        b.iter(|| ModelConfigurator::new(black_box(&config)).unwrap());
    });
}

fn bench_reaction_network(c: &mut Criterion) {
    let params = LeadAcidParameters::standard();
    let model = ModelConfigurator::new(
        &ModelConfig::default().with_option(SIDE_REACTIONS, OptionValue::list(["oxygen"])),
    )
    .unwrap();
    let options = model.options().clone();
    let builder = ReactionNetworkBuilder::new(&params);

    c.bench_function("reactions/oxygen", |b| {
        b.iter(|| builder.build(black_box(&options)));
    });

    let network = builder.build(&options);
    c.bench_function("reactions/fingerprint", |b| {
        b.iter(|| black_box(&network).fingerprint().unwrap());
    });
}

criterion_group!(benches, bench_configure_standard, bench_reaction_network);
criterion_main!(benches);
