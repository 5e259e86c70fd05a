use crate::models::info::{Category, CategoryGroup, GuideItem, GuideResponse, GuideStep, ResearchTool};

const fn category(title: &'static str, description: &'static str) -> Category {
    Category {
        title,
        description,
        tag: None,
    }
}

pub fn categories() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup {
            level: "İlkokul ve Ortaokul Seviyesi",
            categories: vec![
                category("Akıllı Ulaşım", "Şehir içi trafik, güvenlik ve alternatif ulaşım çözümlerine yönelik projeler."),
                category("Çevre ve Enerji", "Atık yönetimi, yenilenebilir enerji ve doğayı koruma odaklı teknolojik fikirler."),
                category("Eğitim Teknolojileri", "Öğrenmeyi kolaylaştıran, kalıcı kılan dijital veya fiziksel materyaller."),
                category("Engelsiz Yaşam", "Engelli bireylerin sosyal hayata katılımını artıran yardımcı teknolojiler."),
                category("İnsanlık Yararına Teknoloji", "Sağlık, afet yönetimi ve sosyal inovasyon gibi toplum yararına çalışmalar."),
                Category {
                    title: "Türkçe Doğal Dil İşleme",
                    description: "Türkçe metinleri anlayan, özetleyen veya işleyen yazılım projeleri.",
                    tag: Some("Rapor Beklenmez"),
                },
            ],
        },
        CategoryGroup {
            level: "Ortaokul ve Üzeri Özel Kategoriler",
            categories: vec![
                category("İnsansız Su Altı Sistemleri", "Sualtı görevlerini otonom veya uzaktan kumandayla yapabilen robotik sistemler."),
                category("Teknofest Robolig", "Farklı görev senaryolarını yerine getiren otonom robot takımları mücadelesi."),
            ],
        },
        CategoryGroup {
            level: "Lise ve Üzeri (Teknik Odaklı)",
            categories: vec![
                category("Biyoteknoloji & İnovasyon", "Tıp, tarım ve sanayide kullanılan biyolojik sistem çözümleri."),
                category("Efficiency Challenge", "En az enerjiyle en uzun mesafe giden elektrikli araç tasarımı."),
                category("İnsansız Hava Araçları (İHA)", "Havadaki otonom görevleri başarıyla tamamlayan dronelar."),
                category("İklim Değişikliği Araştırma", "Küresel ısınmaya karşı bilimsel temelli çözüm önerileri."),
                category("Kutup Araştırma", "Kutuplardaki bilimsel hayatı ve doğayı inceleyen çalışmalar."),
                category("Robotaksi (Otonom Araç)", "Şehir trafiğinde tam otonom sürüş yapabilen binek araçlar."),
                category("Sağlıkta Yapay Zeka", "Teşhis ve tedavi süreçlerinde yapay zeka algoritmaları."),
                category("Sanayide Dijital Teknolojiler", "Fabrika otomasyonu ve akıllı üretim bantları."),
                category("Savaşan İHA", "Hava-hava görevlerini yerine getiren otonom hava araçları."),
                category("Tarım Teknolojileri", "Verimi artıran akıllı sulama ve hasat sistemleri."),
                category("Kablosuz Haberleşme", "Uzun mesafeli, kesintisiz ve güvenli veri aktarımı."),
                category("Turizm Teknolojileri", "Turizm deneyimini dijitalleştiren yenilikçi yazılımlar."),
                category("Uçan Araba Simülasyonu", "Geleceğin hava trafik kontrol ve araç simülasyonları."),
                category("Ulaşımda Yapay Zeka", "Ulaşım ağlarını yöneten akıllı karar destek sistemleri."),
                category("İnsansız Deniz Aracı", "Deniz yüzeyinde otonom seyir ve operasyon sistemleri."),
            ],
        },
    ]
}

pub fn research_tools() -> Vec<ResearchTool> {
    vec![
        ResearchTool {
            name: "Consensus",
            url: "https://consensus.app/",
            description: "Bilimsel makalelerden kanıta dayalı cevaplar bulan AI araştırma motoru.",
            tag: "Bilimsel Kaynak",
        },
        ResearchTool {
            name: "NotebookLM",
            url: "https://notebooklm.google.com/",
            description: "Kendi kaynaklarınızı yükleyip üzerinden çalışma yapabileceğiniz akıllı not defteri.",
            tag: "Analiz & Not",
        },
        ResearchTool {
            name: "STORM",
            url: "https://storm.genie.stanford.edu/",
            description: "Konu hakkında kapsamlı akademik rapor taslakları hazırlayan Stanford AI sistemi.",
            tag: "Rapor Taslağı",
        },
    ]
}

pub fn guide() -> GuideResponse {
    GuideResponse {
        steps: vec![
            GuideStep {
                id: 1,
                title: "Kategori & Şartname",
                content: "teknofest.org adresinden eğitim seviyenize uygun kategoriyi seçin ve mutlaka Yarışma Şartnamesi ile Rapor Şablonunu indirin.",
            },
            GuideStep {
                id: 2,
                title: "Kayıt & Takım",
                content: "t3kys.com üzerinden kaydınızı yapın. Takım üyelerini ve danışman öğretmen bilgilerinizi sisteme girin.",
            },
            GuideStep {
                id: 3,
                title: "Rapor Hazırlama",
                content: "Word şablonuna sadık kalarak (Arial, 12pt, max 6 sayfa) raporu hazırlayın. Mavi yazıları silmeyi unutmayın!",
            },
            GuideStep {
                id: 4,
                title: "PDF & Yükleme",
                content: "Dosyanızı PDF formatına çevirin ve T3 KYS sisteminde 'Yeni Form Atandı' diyerek yüklemeyi tamamlayın.",
            },
        ],
        principles: vec![
            GuideItem {
                number: "1",
                title: "Sorun Odaklılık",
                description: "Proje, çevrenizde gördüğünüz gerçek bir probleme çözüm aramalıdır. Sayısal verilerle sorunu net tanımlayın.",
            },
            GuideItem {
                number: "2",
                title: "Yenilik & Özgünlük",
                description: "Önerilen çözüm piyasadaki ürünlerden farklı olmalıdır. Daha ucuz, hızlı veya yerli olması bir farktır.",
            },
            GuideItem {
                number: "3",
                title: "Uygulanabilirlik",
                description: "Proje sadece teoride kalmamalıdır. Gerçek hayatta uygulanabilir ve ticarileşme potansiyeli olan bir fikir olmalıdır.",
            },
        ],
        methodology: vec![
            GuideItem {
                number: "01",
                title: "Problemi Tanımlama",
                description: "Sayısal veriler ve resmi kaynaklarla sorunu netleştirin (Örn: Ülkemizde 800.000 görme engelli vatandaşımız bulunmaktadır).",
            },
            GuideItem {
                number: "02",
                title: "Literatür Taraması",
                description: "Mevcut çözümlerin neden yetersiz olduğunu araştırın ve projenizin bu eksiklikleri nasıl giderdiğini belirtin.",
            },
            GuideItem {
                number: "03",
                title: "Yöntem & Dil",
                description: "Kullanılan teknolojileri (Python, Arduino vb.) adım adım anlatın. 'Yapıldı/Edildi' gibi akademik dil kullanın.",
            },
        ],
        critical_notes: vec![
            "Ön değerlendirme aşamasında genellikle video istenmemektedir.",
            "Kaynakçada röportaj değil, bilimsel makale veya URL belirtilmelidir.",
            "Mavi bilgilendirme yazılarını mutlaka silin, temiz bir rapor sunun.",
            "Proje özetini raporun en sonunda, her şey bittikten sonra yazın.",
            "Kapak ve kaynakça dahil toplam 6 sayfa sınırını asla aşmayın.",
        ],
    }
}
