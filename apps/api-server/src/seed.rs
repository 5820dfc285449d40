//! Initial item catalog.
//!
//! Seeds the store with the household starter list on first boot. Skipped
//! entirely when any item already exists, so re-running the server never
//! duplicates the catalog.

use entities::{Category, Item, Priority};
use registry_store::{RegistryStore, StoreResult};

struct SeedItem {
    name: &'static str,
    category: Category,
    sub_category: &'static str,
    description: &'static str,
    priority: Priority,
}

const CATALOG: &[SeedItem] = &[
    // Cozinha
    SeedItem {
        name: "Fogão",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Fogão 4 ou 5 bocas com forno",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Geladeira",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Geladeira duplex ou frost free",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Micro-ondas",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Micro-ondas 20L ou maior",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Liquidificador",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Liquidificador com jarra de vidro",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Air fryer",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Fritadeira elétrica sem óleo",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Cafeteira",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Cafeteira elétrica ou italiana",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Batedeira",
        category: Category::Cozinha,
        sub_category: "Eletrodomésticos e Equipamentos",
        description: "Batedeira planetária ou comum",
        priority: Priority::Baixa,
    },
    SeedItem {
        name: "Jogo de panelas",
        category: Category::Cozinha,
        sub_category: "Panelas e Assadeiras",
        description: "Mínimo: 1 pequena, 1 média e 1 grande",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Panela de pressão",
        category: Category::Cozinha,
        sub_category: "Panelas e Assadeiras",
        description: "Panela de pressão 4,5L",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Frigideira antiaderente",
        category: Category::Cozinha,
        sub_category: "Panelas e Assadeiras",
        description: "Frigideira média antiaderente",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Conjunto de facas",
        category: Category::Cozinha,
        sub_category: "Utensílios Básicos",
        description: "Facas de chef, pão e legumes",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Tábua de corte",
        category: Category::Cozinha,
        sub_category: "Utensílios Básicos",
        description: "Tábua de corte de bambu ou plástico",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Jogo de Pratos rasos e fundos",
        category: Category::Cozinha,
        sub_category: "Louças e Talheres",
        description: "Jogo com 6 pratos rasos e 6 fundos",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Jogo de talheres",
        category: Category::Cozinha,
        sub_category: "Louças e Talheres",
        description: "Garfos, facas, colheres de sopa, sobremesa e chá",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Jogo de Copos para água",
        category: Category::Cozinha,
        sub_category: "Louças e Talheres",
        description: "Jogo com 6 copos",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Potes herméticos para mantimentos",
        category: Category::Cozinha,
        sub_category: "Organização e Armazenamento",
        description: "Conjunto de potes para mantimentos",
        priority: Priority::Media,
    },
    // Sala e Copa
    SeedItem {
        name: "Sofá",
        category: Category::SalaCopa,
        sub_category: "Móveis Principais",
        description: "Sofá de 3 lugares",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Mesa de jantar e cadeiras",
        category: Category::SalaCopa,
        sub_category: "Móveis Principais",
        description: "Mesa com 4 ou 6 cadeiras",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Rack ou painel para TV",
        category: Category::SalaCopa,
        sub_category: "Móveis Principais",
        description: "Rack ou painel para a televisão",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Televisão",
        category: Category::SalaCopa,
        sub_category: "Eletroeletrônicos",
        description: "Smart TV 43 polegadas ou maior",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Ventilador ou ar-condicionado",
        category: Category::SalaCopa,
        sub_category: "Eletroeletrônicos",
        description: "Climatização da sala",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Cortinas",
        category: Category::SalaCopa,
        sub_category: "Decoração e Conforto",
        description: "Cortinas para a sala",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Almofadas decorativas",
        category: Category::SalaCopa,
        sub_category: "Decoração e Conforto",
        description: "Almofadas para o sofá",
        priority: Priority::Baixa,
    },
    // Banheiro e Quintal
    SeedItem {
        name: "Toalhas de banho",
        category: Category::BanheiroQuintal,
        sub_category: "Itens Básicos",
        description: "Mínimo 3 por pessoa",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Jogos de banheiro",
        category: Category::BanheiroQuintal,
        sub_category: "Itens Básicos",
        description: "2 jogos de tapetes para banheiro",
        priority: Priority::Media,
    },
    SeedItem {
        name: "Lixeira com tampa",
        category: Category::BanheiroQuintal,
        sub_category: "Itens Básicos",
        description: "Lixeira com tampa para o banheiro",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Máquina de Lavar",
        category: Category::BanheiroQuintal,
        sub_category: "Outros Itens Úteis",
        description: "Máquina de lavar roupas 8kg ou maior",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Varal",
        category: Category::BanheiroQuintal,
        sub_category: "Outros Itens Úteis",
        description: "Varal de chão ou de teto",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Vassoura",
        category: Category::BanheiroQuintal,
        sub_category: "Outros Itens Úteis",
        description: "Vassoura, rodo e pá",
        priority: Priority::Alta,
    },
    // Quarto
    SeedItem {
        name: "Cama",
        category: Category::Quarto,
        sub_category: "Móveis Principais",
        description: "Cama de casal",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Colchão",
        category: Category::Quarto,
        sub_category: "Móveis Principais",
        description: "Colchão de casal",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Guarda-roupa",
        category: Category::Quarto,
        sub_category: "Móveis Principais",
        description: "Guarda-roupa de casal",
        priority: Priority::Essencial,
    },
    SeedItem {
        name: "Jogos de lençol",
        category: Category::Quarto,
        sub_category: "Roupa de Cama",
        description: "3 jogos de lençol de casal",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Edredom",
        category: Category::Quarto,
        sub_category: "Roupa de Cama",
        description: "3 edredons de casal",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Travesseiros",
        category: Category::Quarto,
        sub_category: "Roupa de Cama",
        description: "Travesseiros e capas protetoras",
        priority: Priority::Alta,
    },
    SeedItem {
        name: "Abajur ou luminária",
        category: Category::Quarto,
        sub_category: "Decoração e Conforto",
        description: "Iluminação de cabeceira",
        priority: Priority::Baixa,
    },
];

/// Seeds the initial catalog when the item table is empty.
///
/// Returns the number of items inserted (zero when the store already has
/// items).
pub async fn seed_catalog<S: RegistryStore>(store: &S) -> StoreResult<usize> {
    let existing = store.list_items().await?;
    if !existing.is_empty() {
        tracing::info!(count = existing.len(), "Store already has items, skipping seed");
        return Ok(0);
    }

    for entry in CATALOG {
        let item = Item::new(entry.name, entry.category)
            .with_sub_category(entry.sub_category)
            .with_description(entry.description)
            .with_priority(entry.priority);
        store.create_item(item).await?;
    }

    tracing::info!(count = CATALOG.len(), "Seeded initial item catalog");
    Ok(CATALOG.len())
}
