use cofrap_shared::GeneratePassword;
use cofrap_shared::workflow::USERNAME;
use yew::prelude::*;

use crate::components::{Alert, AlertKind, Button, Card, CardSection, Input, QrCode};
use crate::hooks::use_workflow_form;

#[function_component(GeneratePasswordPage)]
pub fn generate_password_page() -> Html {
    let form = use_workflow_form::<GeneratePassword>();
    let state = form.controller();

    html! {
        <div class="space-y-6">
            <Card
                title="Générer un Mot de Passe"
                description="Créez ou mettez à jour un compte utilisateur avec un mot de passe sécurisé généré automatiquement."
            >
                <form onsubmit={form.onsubmit.clone()} class="space-y-6">
                    <Input
                        label="Nom d'utilisateur"
                        name={USERNAME}
                        value={form.value(USERNAME)}
                        oninput={form.oninput(USERNAME)}
                        error={form.field_error(USERNAME)}
                        placeholder="Entrez le nom d'utilisateur"
                        required=true
                        autofocus=true
                    />

                    <Button button_type="submit" is_loading={state.is_loading()} class="w-full md:w-auto">
                        {"Générer le Mot de Passe"}
                    </Button>
                </form>

                if let Some(error) = state.last_error() {
                    <div class="mt-6">
                        <Alert kind={AlertKind::Error}>{error.to_string()}</Alert>
                    </div>
                }

                if let Some(response) = state.last_response() {
                    <div class="mt-6 space-y-4">
                        <Alert kind={AlertKind::Success}>{response.message.clone()}</Alert>
                        <div class="pt-4 border-t border-gray-200">
                            <QrCode
                                data={response.qr_code_base64.clone()}
                                alt="QR Code contenant le mot de passe"
                                title="QR Code du Mot de Passe"
                            />
                            <div class="mt-4 p-4 bg-yellow-50 border border-yellow-200 rounded-lg">
                                <p class="text-sm text-yellow-800">
                                    <strong>{"Important : "}</strong>
                                    {"Le QR code contient votre mot de passe en clair. \
                                      Scannez-le et conservez-le en lieu sûr. \
                                      Vous en aurez besoin pour vous authentifier."}
                                </p>
                            </div>
                        </div>
                    </div>
                }
            </Card>

            <Card title="Comment ça fonctionne ?">
                <div class="space-y-4 text-gray-700">
                    <CardSection title="1. Génération sécurisée">
                        {"Un mot de passe complexe de 24 caractères est généré automatiquement avec des \
                          lettres majuscules, minuscules, chiffres et caractères spéciaux."}
                    </CardSection>
                    <CardSection title="2. Stockage sécurisé">
                        {"Le mot de passe est hashé avec bcrypt avant d'être stocké en base de données. \
                          Seul le QR code contient le mot de passe en clair."}
                    </CardSection>
                    <CardSection title="3. QR Code">
                        {"Un QR code est généré pour faciliter la sauvegarde du mot de passe. \
                          Vous pouvez le scanner avec n'importe quelle application de lecture de QR code."}
                    </CardSection>
                </div>
            </Card>
        </div>
    }
}
